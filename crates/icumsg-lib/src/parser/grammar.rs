//! Grammar productions.
//!
//! ```text
//! message   = (text | argument | '#')*
//! argument  = '{' name [',' format [',' (style | options | choices)]] '}'
//! options   = ['offset' ':' number] (selector '{' message '}')+
//! selector  = identifier | '=' number
//! choices   = number ('#' | '<') message ('|' number ('#' | '<') message)*
//! ```
//!
//! `#` is a placeholder only inside plural and selectordinal options, and
//! `|` ends a message only inside a choice option. Elsewhere both are text.
//! Whitespace between argument syntax tokens is insignificant.

use super::ast::{
    Choice, ChoiceOption, FormattedArgument, Message, Node, Plural, Pound, Select, SelectOption,
    SimpleArgument, Span, Text,
};
use super::core::Parser;
use super::error::{ParseError, ParseErrorKind};
use super::lexer::TokenKind;

/// Where a message appears; decides which tokens end it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageContext {
    Root,
    Option,
    Choice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComplexKind {
    Select,
    Plural,
    SelectOrdinal,
}

impl ComplexKind {
    fn from_keyword(format: &str) -> Option<Self> {
        match format {
            "select" => Some(ComplexKind::Select),
            "plural" => Some(ComplexKind::Plural),
            "selectordinal" => Some(ComplexKind::SelectOrdinal),
            _ => None,
        }
    }

    fn is_plural(self) -> bool {
        matches!(self, ComplexKind::Plural | ComplexKind::SelectOrdinal)
    }
}

/// Consecutive text-like tokens, flushed into one `Text` node.
#[derive(Default)]
struct TextBuffer {
    value: String,
    span: Option<Span>,
}

impl TextBuffer {
    fn push(&mut self, text: &str, start: usize, end: usize) {
        self.value.push_str(text);
        let start = self.span.map_or(start, |span| span.start);
        self.span = Some(Span::new(start, end));
    }

    fn flush(&mut self, parts: &mut Vec<Node>) {
        let Some(span) = self.span.take() else {
            return;
        };
        parts.push(Node::Text(Text {
            value: std::mem::take(&mut self.value),
            span,
        }));
    }
}

impl Parser<'_> {
    pub(super) fn parse_root(&mut self) -> Result<Message, ParseError> {
        let message = self.parse_message(MessageContext::Root)?;
        if self.current() != TokenKind::Eof {
            let found = self.describe_current();
            return Err(self.error(ParseErrorKind::TrailingInput { found }));
        }
        Ok(message)
    }

    fn parse_message(&mut self, context: MessageContext) -> Result<Message, ParseError> {
        let start = self.offset();
        let mut parts = Vec::new();
        let mut text = TextBuffer::default();

        loop {
            match self.current() {
                TokenKind::Eof | TokenKind::BraceClose => break,
                TokenKind::Pipe if context == MessageContext::Choice => break,
                TokenKind::BraceOpen => {
                    text.flush(&mut parts);
                    parts.push(self.parse_argument()?);
                }
                TokenKind::Hash if self.plural_depth > 0 => {
                    text.flush(&mut parts);
                    let token = self.bump();
                    parts.push(Node::Pound(Pound {
                        span: Span::new(token.start, token.end()),
                    }));
                }
                _ => {
                    let token = self.bump();
                    text.push(&token.text, token.start, token.end());
                }
            }
        }

        text.flush(&mut parts);
        let end = self.offset();
        Ok(Message::new(parts, Span::new(start, end)))
    }

    fn parse_argument(&mut self) -> Result<Node, ParseError> {
        let start = self.offset();
        self.enter()?;
        let node = self.parse_argument_body(start);
        self.exit();
        node
    }

    fn parse_argument_body(&mut self, start: usize) -> Result<Node, ParseError> {
        self.expect(TokenKind::BraceOpen, "'{'")?;
        self.skip_whitespace();
        let name = self.parse_name()?;
        self.skip_whitespace();

        if self.eat(TokenKind::BraceClose) {
            return Ok(Node::SimpleArgument(SimpleArgument {
                name,
                span: self.span_from(start),
            }));
        }

        self.expect(TokenKind::Comma, "',' or '}'")?;
        self.skip_whitespace();
        let format = self.expect(TokenKind::Identifier, "argument type")?.text;
        self.skip_whitespace();

        if self.eat(TokenKind::BraceClose) {
            return Ok(Node::FormattedArgument(FormattedArgument {
                name,
                format,
                style: None,
                span: self.span_from(start),
                style_span: None,
            }));
        }

        self.expect(TokenKind::Comma, "',' or '}'")?;
        self.skip_whitespace();

        if let Some(kind) = ComplexKind::from_keyword(&format) {
            return self.parse_complex(kind, name, &format, start);
        }
        if format == "choice" {
            return self.parse_choice(name, start);
        }
        self.parse_style(name, format, start)
    }

    /// Argument name. Positional names (`{0}`) are accepted alongside identifiers.
    fn parse_name(&mut self) -> Result<String, ParseError> {
        match self.current() {
            TokenKind::Identifier => Ok(self.bump().text),
            TokenKind::Number if !self.current_token().text.contains(['-', '.']) => {
                Ok(self.bump().text)
            }
            _ => Err(self.unexpected("argument name")),
        }
    }

    /// Raw source up to the closing `}`, trimmed.
    fn parse_style(
        &mut self,
        name: String,
        format: String,
        start: usize,
    ) -> Result<Node, ParseError> {
        let style_start = self.offset();
        loop {
            match self.current() {
                TokenKind::BraceClose => break,
                TokenKind::BraceOpen => return Err(self.error(ParseErrorKind::BraceInStyle)),
                TokenKind::Eof => return Err(self.unexpected("'}'")),
                _ => {
                    self.bump();
                }
            }
        }
        let style_end = self.offset();
        self.bump();

        let raw = &self.source[style_start..style_end];
        let trimmed = raw.trim_end();
        let (style, style_span) = if trimmed.is_empty() {
            (None, None)
        } else {
            let span = Span::new(style_start, style_start + trimmed.len());
            (Some(trimmed.to_string()), Some(span))
        };

        Ok(Node::FormattedArgument(FormattedArgument {
            name,
            format,
            style,
            span: self.span_from(start),
            style_span,
        }))
    }

    fn parse_complex(
        &mut self,
        kind: ComplexKind,
        name: String,
        format: &str,
        start: usize,
    ) -> Result<Node, ParseError> {
        let mut offset = None;
        if kind.is_plural()
            && self.current() == TokenKind::Identifier
            && self.current_token().text == "offset"
            && self.next_significant_is(TokenKind::Colon)
        {
            self.bump();
            self.skip_whitespace();
            self.expect(TokenKind::Colon, "':'")?;
            self.skip_whitespace();
            offset = Some(self.expect_number("offset value")?);
        }

        let mut options = Vec::new();
        loop {
            self.skip_whitespace();
            if self.current() == TokenKind::BraceClose {
                break;
            }
            options.push(self.parse_option(kind, format)?);
        }

        if options.is_empty() {
            return Err(self.error(ParseErrorKind::MissingOptions {
                format: format.to_string(),
            }));
        }
        self.expect(TokenKind::BraceClose, "'}'")?;
        let span = self.span_from(start);

        Ok(match kind {
            ComplexKind::Select => Node::Select(Select {
                name,
                options,
                span,
            }),
            ComplexKind::Plural => Node::Plural(Plural {
                name,
                offset,
                options,
                span,
            }),
            ComplexKind::SelectOrdinal => Node::SelectOrdinal(Plural {
                name,
                offset,
                options,
                span,
            }),
        })
    }

    fn next_significant_is(&self, kind: TokenKind) -> bool {
        let mut n = 1;
        while self.nth(n) == TokenKind::Whitespace {
            n += 1;
        }
        self.nth(n) == kind
    }

    fn parse_option(&mut self, kind: ComplexKind, format: &str) -> Result<SelectOption, ParseError> {
        let start = self.offset();
        let (selector, explicit_value) = match self.current() {
            TokenKind::Identifier => (self.bump().text, None),
            TokenKind::Equals if !kind.is_plural() => {
                return Err(self.error(ParseErrorKind::ExplicitSelectorNotAllowed {
                    format: format.to_string(),
                }));
            }
            TokenKind::Equals => {
                self.bump();
                self.skip_whitespace();
                let value = self.expect_number("number after '='")?;
                (format!("={value}"), Some(value))
            }
            _ => return Err(self.unexpected("selector or '}'")),
        };

        self.skip_whitespace();
        self.expect(TokenKind::BraceOpen, "'{'")?;

        if kind.is_plural() {
            self.plural_depth += 1;
        }
        let message = self.parse_message(MessageContext::Option);
        if kind.is_plural() {
            self.plural_depth -= 1;
        }
        let message = message?;

        self.expect(TokenKind::BraceClose, "'}'")?;

        Ok(SelectOption {
            selector,
            explicit: explicit_value.is_some(),
            explicit_value,
            message,
            span: self.span_from(start),
        })
    }

    fn parse_choice(&mut self, name: String, start: usize) -> Result<Node, ParseError> {
        let mut options = Vec::new();
        loop {
            self.skip_whitespace();
            if self.current() != TokenKind::Number {
                if options.is_empty() {
                    return Err(self.error(ParseErrorKind::ExpectedChoiceOptions));
                }
                return Err(self.unexpected("choice limit"));
            }

            let option_start = self.offset();
            let limit = self.expect_number("choice limit")?;
            self.skip_whitespace();
            let is_exclusive = match self.current() {
                TokenKind::Hash => false,
                TokenKind::LessThan => true,
                _ => return Err(self.error(ParseErrorKind::ExpectedChoiceOperator)),
            };
            self.bump();

            let message = trim_message(self.parse_message(MessageContext::Choice)?);
            options.push(ChoiceOption {
                limit,
                is_exclusive,
                message,
                span: self.span_from(option_start),
            });

            if !self.eat(TokenKind::Pipe) {
                break;
            }
        }

        self.expect(TokenKind::BraceClose, "'}'")?;
        Ok(Node::Choice(Choice {
            name,
            options,
            span: self.span_from(start),
        }))
    }
}

/// Drop whitespace at the edges of a choice option message.
fn trim_message(mut message: Message) -> Message {
    if let Some(Node::Text(first)) = message.parts.first_mut() {
        let trimmed = first.value.trim_start();
        let cut = first.value.len() - trimmed.len();
        first.span.start = (first.span.start + cut).min(first.span.end);
        first.value = trimmed.to_string();
    }
    if let Some(Node::Text(last)) = message.parts.last_mut() {
        let trimmed = last.value.trim_end();
        let cut = last.value.len() - trimmed.len();
        last.span.end = last.span.end.saturating_sub(cut).max(last.span.start);
        last.value = trimmed.to_string();
    }
    message
        .parts
        .retain(|part| !matches!(part, Node::Text(t) if t.value.is_empty()));
    message
}
