//! Fatal lexing and parsing errors.
//!
//! Both carry the byte offset of the failure and a one-line snippet of the
//! source with a caret under that offset.

use crate::diagnostics::render_snippet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("Invalid UTF-8 sequence.")]
    InvalidUtf8,

    #[error("Unterminated quoted literal.")]
    UnterminatedQuote,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub offset: usize,
    pub snippet: String,
}

impl LexError {
    pub fn new(kind: LexErrorKind, offset: usize, source: &str) -> Self {
        Self {
            kind,
            offset,
            snippet: render_snippet(source, offset),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("Expected {expected}, found {found}.")]
    Expected {
        expected: &'static str,
        found: String,
    },

    #[error("Unexpected {found} after the end of the message.")]
    TrailingInput { found: String },

    #[error("Explicit selector is only allowed in plural and selectordinal arguments, not in {format}.")]
    ExplicitSelectorNotAllowed { format: String },

    #[error("Unexpected '{{' in argument style.")]
    BraceInStyle,

    #[error("Expected at least one option for {format} argument.")]
    MissingOptions { format: String },

    #[error("Expected options for choice argument.")]
    ExpectedChoiceOptions,

    #[error("Expected '#' or '<' after choice limit.")]
    ExpectedChoiceOperator,

    #[error("Invalid number `{text}`.")]
    InvalidNumber { text: String },

    #[error("Message nesting exceeds the limit of {limit}.")]
    RecursionLimitExceeded { limit: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
    pub snippet: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize, source: &str) -> Self {
        Self {
            kind,
            offset,
            snippet: render_snippet(source, offset),
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
