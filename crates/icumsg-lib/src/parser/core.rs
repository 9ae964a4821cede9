//! Parser state and low-level token operations.

use super::ast::{Message, Number, Span};
use super::error::{ParseError, ParseErrorKind};
use super::lexer::{Token, TokenKind};
use super::token_stream::TokenStream;

/// Default nesting limit for arguments inside option messages.
pub const DEFAULT_RECURSION_LIMIT: u32 = 128;

/// Recursive-descent parser over a [`TokenStream`].
///
/// Fail-fast: the first grammar violation ends the parse.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) stream: TokenStream,
    /// Number of enclosing plural/selectordinal option messages.
    pub(super) plural_depth: u32,
    pub(super) depth: u32,
    recursion_limit: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, stream: TokenStream) -> Self {
        Self {
            source,
            stream,
            plural_depth: 0,
            depth: 0,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Parse the whole stream as one message.
    pub fn parse(mut self) -> Result<Message, ParseError> {
        tracing::trace!(tokens = self.stream.len(), "parse start");
        let message = self.parse_root()?;
        tracing::trace!(parts = message.parts.len(), "parse done");
        Ok(message)
    }

    pub(super) fn current(&self) -> TokenKind {
        self.stream.peek_kind()
    }

    pub(super) fn current_token(&self) -> &Token {
        self.stream.peek()
    }

    pub(super) fn nth(&self, n: usize) -> TokenKind {
        self.stream.nth(n).kind
    }

    pub(super) fn offset(&self) -> usize {
        self.stream.peek().start
    }

    pub(super) fn bump(&mut self) -> Token {
        self.stream.advance().clone()
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current() == kind {
            self.stream.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn skip_whitespace(&mut self) {
        while self.current() == TokenKind::Whitespace {
            self.stream.advance();
        }
    }

    pub(super) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        if self.current() == kind {
            return Ok(self.bump());
        }
        Err(self.unexpected(expected))
    }

    pub(super) fn expect_number(&mut self, expected: &'static str) -> Result<Number, ParseError> {
        let token = self.expect(TokenKind::Number, expected)?;
        Number::parse(&token.text).ok_or_else(|| {
            self.error_at(
                ParseErrorKind::InvalidNumber {
                    text: token.text.clone(),
                },
                token.start,
            )
        })
    }

    /// Error for the current token when `expected` was required.
    pub(super) fn unexpected(&self, expected: &'static str) -> ParseError {
        let found = self.describe_current();
        self.error(ParseErrorKind::Expected { expected, found })
    }

    pub(super) fn describe_current(&self) -> String {
        let token = self.current_token();
        match token.kind {
            TokenKind::Eof => TokenKind::Eof.describe().to_string(),
            TokenKind::Whitespace => TokenKind::Whitespace.describe().to_string(),
            _ => format!("'{}'", &self.source[token.start..token.end()]),
        }
    }

    pub(super) fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(kind, self.offset())
    }

    pub(super) fn error_at(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, offset, self.source)
    }

    /// Enter one argument level, failing past the recursion limit.
    pub(super) fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.recursion_limit {
            return Err(self.error(ParseErrorKind::RecursionLimitExceeded {
                limit: self.recursion_limit,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Span from `start` to the end of the last consumed token.
    pub(super) fn span_from(&self, start: usize) -> Span {
        let pos = self.stream.position();
        let end = if pos == 0 {
            start
        } else {
            self.stream.get(pos - 1).map_or(start, Token::end)
        };
        Span::new(start, end.max(start))
    }
}
