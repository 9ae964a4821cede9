//! icumsg: ICU MessageFormat front end.
//!
//! Parse a message, then run passes over the tree:
//!
//! ```
//! use icumsg_lib::{ArgType, FormatOptions};
//!
//! let source = "{count, plural, one {# item} other {# items}}";
//! let message = icumsg_lib::parse(source).expect("valid message");
//!
//! let types = icumsg_lib::infer(&message);
//! assert_eq!(types.get("count"), Some(ArgType::Number));
//!
//! assert!(!icumsg_lib::validate(&message, source).has_errors());
//!
//! let pretty = icumsg_lib::format(&message, &FormatOptions::default());
//! assert_eq!(pretty, "{count, plural,\n    one   {# item}\n    other {# items}\n}");
//! ```
//!
//! Plural category selection lives in [`icumsg_core::plural`] and is
//! re-exported here as [`PluralRules`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod parser;
pub mod patterns;
pub mod printer;

#[cfg(test)]
mod test_utils;

pub use analyze::{ArgType, TypeMap};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticsPrinter, Severity, ValidationResult};
pub use icumsg_core::plural::{PluralCategory, PluralRules};
pub use parser::ast::Message;
pub use parser::{LexError, ParseError, TokenStream};
pub use printer::{AnsiStyler, Category, FormatOptions, HtmlStyler, PlainStyler, Styler};

use analyze::{SemanticValidator, StyleValidator, TypeInferer};
use parser::Parser;

/// Errors that end a parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Byte offset of the failure in the source.
    pub fn offset(&self) -> usize {
        match self {
            Error::Lex(e) => e.offset,
            Error::Parse(e) => e.offset,
        }
    }

    /// Source line with a caret under the failure.
    pub fn snippet(&self) -> &str {
        match self {
            Error::Lex(e) => &e.snippet,
            Error::Parse(e) => &e.snippet,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn tokenize(text: &str) -> Result<TokenStream> {
    Ok(parser::tokenize(text)?)
}

/// Tokenize bytes that may not be valid UTF-8.
pub fn tokenize_bytes(bytes: &[u8]) -> Result<TokenStream> {
    Ok(parser::tokenize_bytes(bytes)?)
}

pub fn parse(text: &str) -> Result<Message> {
    let stream = parser::tokenize(text)?;
    Ok(Parser::new(text, stream).parse()?)
}

/// Parse with a custom nesting limit for arguments.
pub fn parse_with_recursion_limit(text: &str, limit: u32) -> Result<Message> {
    let stream = parser::tokenize(text)?;
    Ok(Parser::new(text, stream).with_recursion_limit(limit).parse()?)
}

/// Argument name → inferred type.
pub fn infer(message: &Message) -> TypeMap {
    TypeInferer::new().infer(message)
}

/// Structural checks. `source` is the text `message` was parsed from.
pub fn validate(message: &Message, source: &str) -> ValidationResult {
    SemanticValidator::new(source).validate(message)
}

/// Number and date pattern checks on argument styles.
pub fn validate_styles(message: &Message, source: &str) -> ValidationResult {
    StyleValidator::new(source).validate(message)
}

pub fn format(message: &Message, options: &FormatOptions) -> String {
    printer::format(message, options)
}

pub fn highlight<S: Styler + ?Sized>(message: &Message, styler: &S) -> String {
    printer::highlight(message, styler)
}

pub fn highlight_with<S: Styler + ?Sized>(
    message: &Message,
    options: &FormatOptions,
    styler: &S,
) -> String {
    printer::highlight_with(message, options, styler)
}
