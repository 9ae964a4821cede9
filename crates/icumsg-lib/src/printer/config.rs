//! Layout options for the pretty-printer.

/// How [`format`](crate::format) lays out select, plural, and choice blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Prefix per nesting level for option lines
    pub(crate) indent: String,
    /// Separator between option lines; never empty
    pub(crate) line_break: String,
    /// Pad selectors in a block to the width of the longest one
    pub(crate) align_selectors: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            line_break: "\n".to_string(),
            align_selectors: true,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }

    /// Set the line separator. An empty separator is ignored.
    pub fn line_break(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.line_break = value;
        }
        self
    }

    pub fn align_selectors(mut self, value: bool) -> Self {
        self.align_selectors = value;
        self
    }
}
