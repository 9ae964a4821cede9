//! Non-fatal findings from semantic and pattern validation.

mod message;
mod printer;
mod snippet;

#[cfg(test)]
mod snippet_tests;

use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

pub use message::{DiagnosticKind, Severity};
pub use printer::DiagnosticsPrinter;
pub use snippet::{MAX_COLUMNS, render_snippet};

/// One finding, positioned at a byte offset of the validated source.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    severity: Severity,
    message: String,
    position: usize,
    source: Arc<str>,
    snippet: OnceCell<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: usize, source: Arc<str>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: kind.message(None),
            position,
            source,
            snippet: OnceCell::new(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source line around `position` with a caret, rendered on first use.
    pub fn snippet(&self) -> &str {
        self.snippet
            .get_or_init(|| render_snippet(&self.source, self.position))
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl PartialEq for Diagnostic {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.severity == other.severity
            && self.message == other.message
            && self.position == other.position
            && self.source == other.source
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] at {}: {}",
            self.severity,
            self.code(),
            self.position,
            self.message
        )
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Diagnostic", 4)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("position", &self.position)?;
        state.serialize_field("snippet", self.snippet())?;
        state.serialize_field("code", self.code())?;
        state.end()
    }
}

/// Ordered findings of one or more validation passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    result: &'a mut ValidationResult,
    diagnostic: Diagnostic,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a finding of `kind` at `position` in `source`.
    pub fn report(
        &mut self,
        kind: DiagnosticKind,
        position: usize,
        source: &Arc<str>,
    ) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            result: self,
            diagnostic: Diagnostic::new(kind, position, Arc::clone(source)),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_warning)
    }

    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error()).collect()
    }

    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning()).collect()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    /// Codes of all findings, in report order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.diagnostics.iter().map(Diagnostic::code).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Append the findings of `other` after this result's own.
    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("errors", &self.errors())?;
        state.serialize_field("warnings", &self.warnings())?;
        state.end()
    }
}

impl DiagnosticBuilder<'_> {
    /// Detail rendered through the kind's message template.
    pub fn message(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.diagnostic.message = self.diagnostic.kind.message(Some(&detail));
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.diagnostic.severity = severity;
        self
    }

    pub fn emit(self) {
        self.result.diagnostics.push(self.diagnostic);
    }
}
