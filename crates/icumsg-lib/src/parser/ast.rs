//! Message syntax tree.
//!
//! Nodes own their children and record `[start, end)` byte offsets into the
//! parsed source. Structural comparison that ignores offsets goes through
//! [`Message::dump`].

use std::fmt::{self, Write};

use serde::Serialize;

use crate::analyze::visitor::Visitor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Numeric literal from an offset, explicit selector, or choice limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Integer unless the literal contains `.` or overflows `i64`.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse()
            .map(Number::Int)
            .ok()
            .or_else(|| text.parse().ok().map(Number::Float))
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            // Keep the `.` so the literal reparses as a float.
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Message {
    pub parts: Vec<Node>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Text(Text),
    SimpleArgument(SimpleArgument),
    FormattedArgument(FormattedArgument),
    Select(Select),
    Plural(Plural),
    SelectOrdinal(Plural),
    Pound(Pound),
    Choice(Choice),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleArgument {
    pub name: String,
    pub span: Span,
}

/// `{name, format}` or `{name, format, style}` for any format other than
/// select, plural, selectordinal, and choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedArgument {
    pub name: String,
    pub format: String,
    pub style: Option<String>,
    pub span: Span,
    /// Location of `style` in the source.
    #[serde(skip)]
    pub style_span: Option<Span>,
}

/// The formatter family a [`FormattedArgument`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    Number,
    Date,
    Time,
    Spellout,
    Ordinal,
    Duration,
    Other,
}

impl FormatterKind {
    pub fn from_keyword(format: &str) -> Self {
        match format {
            "number" => FormatterKind::Number,
            "date" => FormatterKind::Date,
            "time" => FormatterKind::Time,
            "spellout" => FormatterKind::Spellout,
            "ordinal" => FormatterKind::Ordinal,
            "duration" => FormatterKind::Duration,
            _ => FormatterKind::Other,
        }
    }

    /// Number-like formatters; the argument is numeric.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FormatterKind::Number
                | FormatterKind::Spellout
                | FormatterKind::Ordinal
                | FormatterKind::Duration
        )
    }

    pub fn is_temporal(self) -> bool {
        matches!(self, FormatterKind::Date | FormatterKind::Time)
    }
}

impl FormattedArgument {
    pub fn formatter(&self) -> FormatterKind {
        FormatterKind::from_keyword(&self.format)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Select {
    pub name: String,
    pub options: Vec<SelectOption>,
    pub span: Span,
}

/// Shared shape of `plural` and `selectordinal`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plural {
    pub name: String,
    pub offset: Option<Number>,
    pub options: Vec<SelectOption>,
    pub span: Span,
}

/// One `selector {message}` branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    /// Keyword such as `other`, or `=N` as written for explicit selectors.
    pub selector: String,
    pub explicit: bool,
    pub explicit_value: Option<Number>,
    pub message: Message,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pound {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub name: String,
    pub options: Vec<ChoiceOption>,
    pub span: Span,
}

/// `limit#message` (inclusive) or `limit<message` (exclusive).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceOption {
    pub limit: Number,
    pub is_exclusive: bool,
    pub message: Message,
    pub span: Span,
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Text(n) => n.span,
            Node::SimpleArgument(n) => n.span,
            Node::FormattedArgument(n) => n.span,
            Node::Select(n) => n.span,
            Node::Plural(n) | Node::SelectOrdinal(n) => n.span,
            Node::Pound(n) => n.span,
            Node::Choice(n) => n.span,
        }
    }

    /// Argument name, for every variant that has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::SimpleArgument(n) => Some(&n.name),
            Node::FormattedArgument(n) => Some(&n.name),
            Node::Select(n) => Some(&n.name),
            Node::Plural(n) | Node::SelectOrdinal(n) => Some(&n.name),
            Node::Choice(n) => Some(&n.name),
            Node::Text(_) | Node::Pound(_) => None,
        }
    }

    /// Select, plural, selectordinal, or choice.
    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            Node::Select(_) | Node::Plural(_) | Node::SelectOrdinal(_) | Node::Choice(_)
        )
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_node(self);
    }
}

impl Message {
    pub fn new(parts: Vec<Node>, span: Span) -> Self {
        Self { parts, span }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_message(self);
    }

    /// Argument names in order of first appearance, including nested ones.
    pub fn arguments(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_arguments(self, &mut names);
        names
    }

    /// Whether a direct part is a select, plural, selectordinal, or choice.
    pub fn has_complex(&self) -> bool {
        self.parts.iter().any(Node::is_complex)
    }

    /// Offset-free tree dump, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        dump_message(self, 0, &mut out);
        out
    }
}

fn collect_arguments<'m>(message: &'m Message, names: &mut Vec<&'m str>) {
    for part in &message.parts {
        if let Some(name) = part.name()
            && !names.contains(&name)
        {
            names.push(name);
        }
        match part {
            Node::Select(n) => {
                for opt in &n.options {
                    collect_arguments(&opt.message, names);
                }
            }
            Node::Plural(n) | Node::SelectOrdinal(n) => {
                for opt in &n.options {
                    collect_arguments(&opt.message, names);
                }
            }
            Node::Choice(n) => {
                for opt in &n.options {
                    collect_arguments(&opt.message, names);
                }
            }
            _ => {}
        }
    }
}

fn dump_message(message: &Message, depth: usize, out: &mut String) {
    for part in &message.parts {
        dump_node(part, depth, out);
    }
}

fn dump_node(node: &Node, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    // Writing to a String cannot fail.
    let _ = match node {
        Node::Text(n) => writeln!(out, "{pad}Text {:?}", n.value),
        Node::SimpleArgument(n) => writeln!(out, "{pad}Argument {}", n.name),
        Node::FormattedArgument(n) => match &n.style {
            Some(style) => writeln!(out, "{pad}Formatted {} {} {style:?}", n.name, n.format),
            None => writeln!(out, "{pad}Formatted {} {}", n.name, n.format),
        },
        Node::Pound(_) => writeln!(out, "{pad}Pound"),
        Node::Select(n) => {
            let _ = writeln!(out, "{pad}Select {}", n.name);
            dump_options(&n.options, depth + 1, out);
            Ok(())
        }
        Node::Plural(n) | Node::SelectOrdinal(n) => {
            let label = if matches!(node, Node::Plural(_)) {
                "Plural"
            } else {
                "SelectOrdinal"
            };
            let _ = match n.offset {
                Some(offset) => writeln!(out, "{pad}{label} {} offset={offset}", n.name),
                None => writeln!(out, "{pad}{label} {}", n.name),
            };
            dump_options(&n.options, depth + 1, out);
            Ok(())
        }
        Node::Choice(n) => {
            let _ = writeln!(out, "{pad}Choice {}", n.name);
            for opt in &n.options {
                let op = if opt.is_exclusive { '<' } else { '#' };
                let _ = writeln!(out, "{}Limit {}{op}", "  ".repeat(depth + 1), opt.limit);
                dump_message(&opt.message, depth + 2, out);
            }
            Ok(())
        }
    };
}

fn dump_options(options: &[SelectOption], depth: usize, out: &mut String) {
    for opt in options {
        let _ = writeln!(out, "{}Option {}", "  ".repeat(depth), opt.selector);
        dump_message(&opt.message, depth + 1, out);
    }
}
