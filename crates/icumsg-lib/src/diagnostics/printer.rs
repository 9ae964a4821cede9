//! Builder-pattern printer for rendering findings.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use super::message::Severity;
use super::ValidationResult;

pub struct DiagnosticsPrinter<'d, 's> {
    result: &'d ValidationResult,
    path: Option<&'s str>,
    colored: bool,
    plain: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(result: &'d ValidationResult) -> Self {
        Self {
            result,
            path: None,
            colored: false,
            plain: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// One line per finding, without source excerpts.
    pub fn plain(mut self, value: bool) -> Self {
        self.plain = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.plain {
            return self.format_plain(w);
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.result.iter().enumerate() {
            let source = diag.source();
            let range = adjust_range(source, diag.position());
            let label = format!("{} [{}]", diag.message(), diag.code());

            let mut snippet = Snippet::source(source)
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(range).label(&label));
            if let Some(p) = self.path {
                snippet = snippet.path(p);
            }

            let report = [severity_to_level(diag.severity())
                .primary_title(diag.message())
                .element(snippet)];

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&report))?;
        }
        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.result.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{diag}")?;
        }
        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Widen a position to the character it points at.
fn adjust_range(source: &str, position: usize) -> std::ops::Range<usize> {
    let start = position.min(source.len());
    let width = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    start..start + width
}
