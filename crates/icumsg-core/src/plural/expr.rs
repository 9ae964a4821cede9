//! Evaluator for the arithmetic/boolean language of the built-in rule table.
//!
//! Precedence, loosest first (all binary operators are left-associative):
//!
//! ```text
//! ||
//! &&
//! == != > < >= <=      (non-chaining)
//! + -
//! * / %
//! unary + -
//! ( expr ) | number | operand
//! ```
//!
//! Booleans are numbers: comparisons yield `1` or `0`, and any non-zero value
//! is true. Division and modulo by zero yield `0`.

use std::ops::Range;

use logos::Logos;

use super::operands::PluralOperands;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Tok {
    #[token("||")]
    Or,

    #[token("&&")]
    And,

    #[token("==")]
    Eq,

    #[token("!=")]
    Ne,

    #[token(">=")]
    Ge,

    #[token("<=")]
    Le,

    #[token(">")]
    Gt,

    #[token("<")]
    Lt,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex(r"[a-z]", |lex| lex.slice().chars().next())]
    Operand(char),

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    #[error("invalid character at offset {0}")]
    InvalidToken(usize),

    #[error("unexpected token at offset {0}")]
    UnexpectedToken(usize),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown operand `{0}`")]
    UnknownOperand(char),

    #[error("ternary `?` without matching `:`")]
    MissingColon,
}

/// Evaluate `source` against `operands`.
pub fn evaluate(source: &str, operands: &PluralOperands) -> Result<f64, ExprError> {
    let tokens = lex(source)?;
    let mut evaluator = Evaluator {
        tokens,
        pos: 0,
        operands,
    };
    let value = evaluator.or_expr()?;
    match evaluator.tokens.get(evaluator.pos) {
        Some((_, span)) => Err(ExprError::UnexpectedToken(span.start)),
        None => Ok(value),
    }
}

pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}

fn lex(source: &str) -> Result<Vec<(Tok, Range<usize>)>, ExprError> {
    let mut tokens = Vec::new();
    let mut lexer = Tok::lexer(source);
    while let Some(result) = lexer.next() {
        match result {
            Ok(Tok::Whitespace) => {}
            Ok(tok) => tokens.push((tok, lexer.span())),
            Err(()) => return Err(ExprError::InvalidToken(lexer.span().start)),
        }
    }
    Ok(tokens)
}

fn truth(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

struct Evaluator<'a> {
    tokens: Vec<(Tok, Range<usize>)>,
    pos: usize,
    operands: &'a PluralOperands,
}

impl Evaluator<'_> {
    fn peek(&self) -> Option<Tok> {
        self.tokens.get(self.pos).map(|(tok, _)| *tok)
    }

    fn eat(&mut self, tok: Tok) -> bool {
        if self.peek() == Some(tok) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn or_expr(&mut self) -> Result<f64, ExprError> {
        let mut lhs = self.and_expr()?;
        while self.eat(Tok::Or) {
            let rhs = self.and_expr()?;
            lhs = truth(is_truthy(lhs) || is_truthy(rhs));
        }
        Ok(lhs)
    }

    fn and_expr(&mut self) -> Result<f64, ExprError> {
        let mut lhs = self.comparison()?;
        while self.eat(Tok::And) {
            let rhs = self.comparison()?;
            lhs = truth(is_truthy(lhs) && is_truthy(rhs));
        }
        Ok(lhs)
    }

    fn comparison(&mut self) -> Result<f64, ExprError> {
        let lhs = self.additive()?;
        let op = match self.peek() {
            Some(op @ (Tok::Eq | Tok::Ne | Tok::Gt | Tok::Lt | Tok::Ge | Tok::Le)) => op,
            _ => return Ok(lhs),
        };
        self.pos += 1;
        let rhs = self.additive()?;
        let result = match op {
            Tok::Eq => lhs == rhs,
            Tok::Ne => lhs != rhs,
            Tok::Gt => lhs > rhs,
            Tok::Lt => lhs < rhs,
            Tok::Ge => lhs >= rhs,
            _ => lhs <= rhs,
        };
        Ok(truth(result))
    }

    fn additive(&mut self) -> Result<f64, ExprError> {
        let mut lhs = self.multiplicative()?;
        loop {
            if self.eat(Tok::Plus) {
                lhs += self.multiplicative()?;
            } else if self.eat(Tok::Minus) {
                lhs -= self.multiplicative()?;
            } else {
                return Ok(lhs);
            }
        }
    }

    fn multiplicative(&mut self) -> Result<f64, ExprError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(op @ (Tok::Star | Tok::Slash | Tok::Percent)) => op,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = match op {
                Tok::Star => lhs * rhs,
                _ if rhs == 0.0 => 0.0,
                Tok::Slash => lhs / rhs,
                _ => lhs % rhs,
            };
        }
    }

    fn unary(&mut self) -> Result<f64, ExprError> {
        if self.eat(Tok::Minus) {
            return Ok(-self.unary()?);
        }
        if self.eat(Tok::Plus) {
            return self.unary();
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<f64, ExprError> {
        let Some((tok, span)) = self.tokens.get(self.pos).cloned() else {
            return Err(ExprError::UnexpectedEnd);
        };
        self.pos += 1;
        match tok {
            Tok::Number(value) => Ok(value),
            Tok::Operand(name) => self
                .operands
                .get(name)
                .ok_or(ExprError::UnknownOperand(name)),
            Tok::ParenOpen => {
                let value = self.or_expr()?;
                if self.eat(Tok::ParenClose) {
                    Ok(value)
                } else {
                    match self.tokens.get(self.pos) {
                        Some((_, span)) => Err(ExprError::UnexpectedToken(span.start)),
                        None => Err(ExprError::UnexpectedEnd),
                    }
                }
            }
            _ => Err(ExprError::UnexpectedToken(span.start)),
        }
    }
}
