//! Styling hooks for printed messages.
//!
//! The printer hands every piece of output to a [`Styler`] together with its
//! [`Category`]. Layout whitespace is written as-is.

use icumsg_core::Colors;
use serde::Serialize;

/// Lexical category of a printed fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// `{` and `}` delimiting arguments and option messages
    Brace,
    /// `,` `:` `#` `<` `|` and `=`
    Punctuation,
    ArgumentName,
    /// `select`, `plural`, `number`, `offset`, ...
    Keyword,
    Selector,
    Number,
    /// Raw style of a formatted argument
    Style,
    Text,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Brace => "brace",
            Category::Punctuation => "punctuation",
            Category::ArgumentName => "argument",
            Category::Keyword => "keyword",
            Category::Selector => "selector",
            Category::Number => "number",
            Category::Style => "style",
            Category::Text => "text",
        }
    }
}

pub trait Styler {
    fn style(&self, content: &str, category: Category) -> String;
}

impl<F> Styler for F
where
    F: Fn(&str, Category) -> String,
{
    fn style(&self, content: &str, category: Category) -> String {
        self(content, category)
    }
}

/// Output unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn style(&self, content: &str, _category: Category) -> String {
        content.to_string()
    }
}

/// ANSI terminal colors.
#[derive(Debug, Clone, Copy)]
pub struct AnsiStyler {
    colors: Colors,
}

impl Default for AnsiStyler {
    fn default() -> Self {
        Self { colors: Colors::ON }
    }
}

impl AnsiStyler {
    pub fn new(colors: Colors) -> Self {
        Self { colors }
    }
}

impl Styler for AnsiStyler {
    fn style(&self, content: &str, category: Category) -> String {
        let c = &self.colors;
        let color = match category {
            Category::Brace | Category::Punctuation => c.dim,
            Category::ArgumentName => c.blue,
            Category::Keyword => c.magenta,
            Category::Selector | Category::Number => c.yellow,
            Category::Style => c.green,
            Category::Text => "",
        };
        c.paint(color, content)
    }
}

/// `<span class="icu-…">` around every fragment, HTML-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlStyler;

impl Styler for HtmlStyler {
    fn style(&self, content: &str, category: Category) -> String {
        format!(
            "<span class=\"icu-{}\">{}</span>",
            category.as_str(),
            escape_html(content)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
