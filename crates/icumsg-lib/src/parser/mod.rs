//! Lexing and parsing of ICU MessageFormat text.
//!
//! # Architecture
//!
//! ```text
//! source → lexer (logos) → TokenStream → Parser → Message
//! ```
//!
//! Parsing is fail-fast: the first lexical or grammar error is returned and
//! no partial tree is produced.

pub mod ast;
mod core;
mod error;
mod grammar;
pub mod lexer;
mod token_stream;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod grammar_tests;

pub use ast::{
    Choice, ChoiceOption, FormattedArgument, FormatterKind, Message, Node, Number, Plural, Pound,
    Select, SelectOption, SimpleArgument, Span, Text,
};
pub use core::{DEFAULT_RECURSION_LIMIT, Parser};
pub use error::{LexError, LexErrorKind, ParseError, ParseErrorKind};
pub use lexer::{Token, TokenKind, tokenize, tokenize_bytes};
pub use token_stream::TokenStream;
