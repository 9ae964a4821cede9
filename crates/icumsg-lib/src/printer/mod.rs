//! Pretty-printing and highlighting.

mod config;
mod format;
mod highlight;

#[cfg(test)]
mod format_tests;
#[cfg(test)]
mod highlight_tests;

pub use config::FormatOptions;
pub use format::Printer;
pub use highlight::{AnsiStyler, Category, HtmlStyler, PlainStyler, Styler};

use crate::parser::ast::Message;

/// Render `message` in canonical layout.
pub fn format(message: &Message, options: &FormatOptions) -> String {
    highlight_with(message, options, &PlainStyler)
}

/// Render `message` in the default layout through `styler`.
pub fn highlight<S: Styler + ?Sized>(message: &Message, styler: &S) -> String {
    highlight_with(message, &FormatOptions::default(), styler)
}

pub fn highlight_with<S: Styler + ?Sized>(
    message: &Message,
    options: &FormatOptions,
    styler: &S,
) -> String {
    Printer::new(options, styler).print(message)
}
