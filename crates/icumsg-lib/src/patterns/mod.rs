//! Checks over raw number and date style strings.
//!
//! These work on the `style` text of a formatted argument, not on the tree.
//! Quoted literals (`'...'`, with `''` for an apostrophe) are skipped.

pub mod date;
pub mod number;


use crate::diagnostics::DiagnosticKind;

/// A finding at a byte offset of the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternIssue {
    pub kind: DiagnosticKind,
    pub offset: usize,
    pub detail: Option<String>,
}

impl PatternIssue {
    pub fn new(kind: DiagnosticKind, offset: usize) -> Self {
        Self {
            kind,
            offset,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Pattern characters outside quoted literals.
#[derive(Debug, Default)]
pub(crate) struct Scan {
    pub symbols: Vec<(usize, char)>,
    /// Offset of the `'` that opened a literal never closed.
    pub unterminated_at: Option<usize>,
}

pub(crate) fn scan(pattern: &str) -> Scan {
    let mut scan = Scan::default();
    let mut chars = pattern.char_indices().peekable();
    let mut open_quote: Option<usize> = None;

    while let Some((offset, c)) = chars.next() {
        if c != '\'' {
            if open_quote.is_none() {
                scan.symbols.push((offset, c));
            }
            continue;
        }
        // `''` is an apostrophe both inside and outside a literal.
        if chars.peek().is_some_and(|&(_, next)| next == '\'') {
            chars.next();
            continue;
        }
        open_quote = match open_quote {
            Some(_) => None,
            None => Some(offset),
        };
    }

    scan.unterminated_at = open_quote;
    scan
}
