//! ANSI color codes for terminal output.
//!
//! Five semantic colors with orthogonal dim modifier:
//! - Blue: Argument names
//! - Magenta: Format keywords (`plural`, `select`, `number`, ...)
//! - Yellow: Selectors and numeric literals
//! - Green: Style strings
//! - Dim: Braces and punctuation
//! - Reset: Return to default

/// ANSI color palette for highlighted message output.
///
/// Uses only standard 16-color ANSI codes (no RGB), so output reads the same
/// in light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub magenta: &'static str,
    pub yellow: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        magenta: "\x1b[35m",
        yellow: "\x1b[33m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        magenta: "",
        yellow: "",
        green: "",
        dim: "",
        reset: "",
    };

    /// Create colors based on enabled flag.
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Check if colors are enabled.
    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    /// Wrap `text` in `color` and a reset, or return it untouched when disabled.
    pub fn paint(&self, color: &str, text: &str) -> String {
        if color.is_empty() || text.is_empty() {
            return text.to_string();
        }
        format!("{color}{text}{}", self.reset)
    }
}
