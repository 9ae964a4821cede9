//! Lexer for ICU MessageFormat text.
//!
//! Logos recognizes the raw lexemes; a post-pass then:
//! - unescapes quoted literals (`'{x}'` → `{x}`) and doubled apostrophes (`''` → `'`)
//! - turns lone apostrophes and dashes into text
//! - coalesces adjacent text lexemes into one `Text` token
//! - reports unterminated quoted literals
//! - appends the `Eof` token

use logos::Logos;

use super::error::{LexError, LexErrorKind};
use super::token_stream::TokenStream;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TokenKind {
    BraceOpen,
    BraceClose,
    Comma,
    Colon,
    Hash,
    Equals,
    Pipe,
    LessThan,
    Identifier,
    Number,
    Text,
    Whitespace,
    Eof,
}

impl TokenKind {
    /// How the kind reads in an error message.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::BraceOpen => "'{'",
            TokenKind::BraceClose => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Hash => "'#'",
            TokenKind::Equals => "'='",
            TokenKind::Pipe => "'|'",
            TokenKind::LessThan => "'<'",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Text => "text",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Eof => "end of input",
        }
    }
}

/// Raw lexemes, before unescaping and coalescing.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("#")]
    Hash,

    #[token("=")]
    Equals,

    #[token("|")]
    Pipe,

    #[token("<")]
    LessThan,

    /// `''` outside a quoted literal.
    #[token("''")]
    EscapedQuote,

    /// `'` before a syntax character, up to the closing `'`.
    #[regex(r"'[{}#|](?:[^']|'')*'", allow_greedy = true)]
    QuotedLiteral,

    /// A quoted literal that runs to end of input.
    #[regex(r"'[{}#|](?:[^']|'')*", allow_greedy = true)]
    UnterminatedQuote,

    /// `'` that does not start a quoted literal.
    #[token("'")]
    Apostrophe,

    #[regex(r"[\p{L}_][\p{L}0-9_\-]*")]
    Identifier,

    #[regex(r"-?[0-9]+(?:\.[0-9]+)?")]
    Number,

    /// `-` not followed by a digit.
    #[token("-")]
    Dash,

    #[regex(r"\s+")]
    Whitespace,

    #[regex(r"[^'{},:#=|<\s\p{L}0-9_\-]+", allow_greedy = true)]
    Text,
}

/// Token with its unescaped text and byte position in the source.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Token value. For quoted literals this is the unescaped content.
    pub text: String,
    pub start: usize,
    /// Length in bytes of the token's source text.
    pub len: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, len: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
            len,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Tokenize UTF-8 source.
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    let tokens = lex(source)?;
    tracing::trace!(tokens = tokens.len(), bytes = source.len(), "tokenized");
    Ok(TokenStream::new(tokens))
}

/// Tokenize raw bytes, rejecting invalid UTF-8 at the first bad byte.
pub fn tokenize_bytes(bytes: &[u8]) -> Result<TokenStream, LexError> {
    match std::str::from_utf8(bytes) {
        Ok(source) => tokenize(source),
        Err(err) => {
            let offset = err.valid_up_to();
            let valid = String::from_utf8_lossy(&bytes[..offset]);
            Err(LexError::new(LexErrorKind::InvalidUtf8, offset, &valid))
        }
    }
}

fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();

        let (kind, text) = match result {
            Ok(Lexeme::BraceOpen) => (TokenKind::BraceOpen, slice.to_string()),
            Ok(Lexeme::BraceClose) => (TokenKind::BraceClose, slice.to_string()),
            Ok(Lexeme::Comma) => (TokenKind::Comma, slice.to_string()),
            Ok(Lexeme::Colon) => (TokenKind::Colon, slice.to_string()),
            Ok(Lexeme::Hash) => (TokenKind::Hash, slice.to_string()),
            Ok(Lexeme::Equals) => (TokenKind::Equals, slice.to_string()),
            Ok(Lexeme::Pipe) => (TokenKind::Pipe, slice.to_string()),
            Ok(Lexeme::LessThan) => (TokenKind::LessThan, slice.to_string()),
            Ok(Lexeme::Identifier) => (TokenKind::Identifier, slice.to_string()),
            Ok(Lexeme::Number) => (TokenKind::Number, slice.to_string()),
            Ok(Lexeme::Whitespace) => (TokenKind::Whitespace, slice.to_string()),
            Ok(Lexeme::EscapedQuote) => (TokenKind::Text, "'".to_string()),
            Ok(Lexeme::QuotedLiteral) => (TokenKind::Text, unquote(slice)),
            Ok(Lexeme::UnterminatedQuote) => {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedQuote,
                    span.start,
                    source,
                ));
            }
            // Anything logos cannot classify is plain text.
            Ok(Lexeme::Apostrophe | Lexeme::Dash | Lexeme::Text) | Err(()) => {
                (TokenKind::Text, slice.to_string())
            }
        };

        match tokens.last_mut() {
            Some(prev) if kind == TokenKind::Text && prev.kind == TokenKind::Text => {
                prev.text.push_str(&text);
                prev.len = span.end - prev.start;
            }
            _ => tokens.push(Token::new(kind, text, span.start, span.len())),
        }
    }

    tokens.push(Token::new(TokenKind::Eof, "", source.len(), 0));
    Ok(tokens)
}

/// Strip the surrounding quotes and collapse doubled apostrophes.
fn unquote(slice: &str) -> String {
    let inner = &slice[1..slice.len() - 1];
    inner.replace("''", "'")
}
