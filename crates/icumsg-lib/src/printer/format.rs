//! Canonical re-serialization of a message tree.
//!
//! Select, plural, and selectordinal blocks put one option per line; choice
//! blocks put one limit per line with `|` before all but the first. Nested
//! blocks are indented one level deeper than their enclosing option. Text is
//! written verbatim except for quoting:
//! - `{` and `}` always
//! - `#` inside plural and selectordinal options
//! - `|` inside choice options
//! - `'` is doubled

use super::config::FormatOptions;
use super::highlight::{Category, Styler};
use crate::analyze::visitor::Visitor;
use crate::parser::ast::{
    Choice, FormattedArgument, Message, Plural, Pound, Select, SelectOption, SimpleArgument, Text,
};

/// Visitor that renders a message through a [`Styler`].
pub struct Printer<'a, S: Styler + ?Sized> {
    options: &'a FormatOptions,
    styler: &'a S,
    out: String,
    depth: usize,
    plural_depth: usize,
    choice_depth: usize,
}

impl<'a, S: Styler + ?Sized> Printer<'a, S> {
    pub fn new(options: &'a FormatOptions, styler: &'a S) -> Self {
        Self {
            options,
            styler,
            out: String::new(),
            depth: 0,
            plural_depth: 0,
            choice_depth: 0,
        }
    }

    pub fn print(mut self, message: &Message) -> String {
        self.visit_message(message);
        self.out
    }

    fn emit(&mut self, content: &str, category: Category) {
        if content.is_empty() {
            return;
        }
        let styled = self.styler.style(content, category);
        self.out.push_str(&styled);
    }

    fn layout(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn newline(&mut self, depth: usize) {
        self.out.push_str(&self.options.line_break);
        for _ in 0..depth {
            self.out.push_str(&self.options.indent);
        }
    }

    /// `{name, keyword,`
    fn header(&mut self, name: &str, keyword: &str) {
        self.emit("{", Category::Brace);
        self.emit(name, Category::ArgumentName);
        self.emit(",", Category::Punctuation);
        self.layout(" ");
        self.emit(keyword, Category::Keyword);
        self.emit(",", Category::Punctuation);
    }

    fn close_block(&mut self) {
        self.newline(self.depth);
        self.emit("}", Category::Brace);
    }

    fn option_lines(&mut self, options: &[SelectOption], plural: bool) {
        let width = if self.options.align_selectors {
            options
                .iter()
                .map(|o| o.selector.chars().count())
                .max()
                .unwrap_or(0)
        } else {
            0
        };

        for option in options {
            self.newline(self.depth + 1);
            self.emit(&option.selector, Category::Selector);
            let pad = width.saturating_sub(option.selector.chars().count());
            self.layout(&" ".repeat(pad + 1));
            self.emit("{", Category::Brace);

            self.depth += 1;
            if plural {
                self.plural_depth += 1;
            }
            self.visit_message(&option.message);
            if plural {
                self.plural_depth -= 1;
            }
            self.depth -= 1;

            self.emit("}", Category::Brace);
        }
    }

    fn plural_block(&mut self, plural: &Plural, keyword: &str) {
        self.header(&plural.name, keyword);
        if let Some(offset) = plural.offset {
            self.layout(" ");
            self.emit("offset", Category::Keyword);
            self.emit(":", Category::Punctuation);
            self.emit(&offset.to_string(), Category::Number);
        }
        self.option_lines(&plural.options, true);
        self.close_block();
    }

    fn is_special(&self, c: char) -> bool {
        match c {
            '{' | '}' => true,
            '#' => self.plural_depth > 0,
            '|' => self.choice_depth > 0,
            _ => false,
        }
    }

    /// Quote runs of syntax characters and double apostrophes.
    fn escape(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        let mut run = String::new();
        for c in value.chars() {
            if self.is_special(c) {
                run.push(c);
                continue;
            }
            // An apostrophe next to a quoted run stays inside it as `''`.
            if c == '\'' && !run.is_empty() {
                run.push_str("''");
                continue;
            }
            flush_quoted(&mut out, &mut run);
            if c == '\'' {
                out.push_str("''");
            } else {
                out.push(c);
            }
        }
        flush_quoted(&mut out, &mut run);
        out
    }
}

fn flush_quoted(out: &mut String, run: &mut String) {
    if run.is_empty() {
        return;
    }
    out.push('\'');
    out.push_str(run);
    out.push('\'');
    run.clear();
}

impl<S: Styler + ?Sized> Visitor for Printer<'_, S> {
    fn visit_text(&mut self, text: &Text) {
        let escaped = self.escape(&text.value);
        self.emit(&escaped, Category::Text);
    }

    fn visit_simple_argument(&mut self, arg: &SimpleArgument) {
        self.emit("{", Category::Brace);
        self.emit(&arg.name, Category::ArgumentName);
        self.emit("}", Category::Brace);
    }

    fn visit_formatted_argument(&mut self, arg: &FormattedArgument) {
        self.emit("{", Category::Brace);
        self.emit(&arg.name, Category::ArgumentName);
        self.emit(",", Category::Punctuation);
        self.layout(" ");
        self.emit(&arg.format, Category::Keyword);
        if let Some(style) = &arg.style {
            self.emit(",", Category::Punctuation);
            self.layout(" ");
            self.emit(style, Category::Style);
        }
        self.emit("}", Category::Brace);
    }

    fn visit_select(&mut self, select: &Select) {
        self.header(&select.name, "select");
        self.option_lines(&select.options, false);
        self.close_block();
    }

    fn visit_plural(&mut self, plural: &Plural) {
        self.plural_block(plural, "plural");
    }

    fn visit_select_ordinal(&mut self, ordinal: &Plural) {
        self.plural_block(ordinal, "selectordinal");
    }

    fn visit_pound(&mut self, _pound: &Pound) {
        self.emit("#", Category::Punctuation);
    }

    fn visit_choice(&mut self, choice: &Choice) {
        self.header(&choice.name, "choice");
        for (i, option) in choice.options.iter().enumerate() {
            self.newline(self.depth + 1);
            if i > 0 {
                self.emit("|", Category::Punctuation);
            }
            self.emit(&option.limit.to_string(), Category::Number);
            let op = if option.is_exclusive { "<" } else { "#" };
            self.emit(op, Category::Punctuation);

            self.depth += 1;
            self.choice_depth += 1;
            self.visit_message(&option.message);
            self.choice_depth -= 1;
            self.depth -= 1;
        }
        self.close_block();
    }
}
