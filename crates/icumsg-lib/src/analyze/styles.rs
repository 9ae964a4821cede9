//! Pattern checks for the styles of number, date, and time arguments.

use std::sync::Arc;

use super::visitor::Visitor;
use crate::diagnostics::ValidationResult;
use crate::parser::ast::{FormattedArgument, FormatterKind, Message};
use crate::patterns::{self, PatternIssue};

/// Styles that name a predefined format rather than spell out a pattern.
const KEYWORD_STYLES: &[&str] = &[
    "integer", "percent", "currency", "short", "medium", "long", "full",
];

/// Whether `style` is a custom pattern the pattern validators should see.
pub fn is_custom_pattern(style: &str) -> bool {
    !KEYWORD_STYLES.contains(&style) && !style.starts_with("::")
}

/// Visitor running the number and date pattern validators over styles.
#[derive(Debug)]
pub struct StyleValidator {
    source: Arc<str>,
    result: ValidationResult,
}

impl StyleValidator {
    pub fn new(source: &str) -> Self {
        Self {
            source: Arc::from(source),
            result: ValidationResult::new(),
        }
    }

    pub fn validate(mut self, message: &Message) -> ValidationResult {
        self.visit_message(message);
        self.result
    }

    fn report(&mut self, base: usize, issues: Vec<PatternIssue>) {
        for issue in issues {
            let builder = self
                .result
                .report(issue.kind, base + issue.offset, &self.source);
            match issue.detail {
                Some(detail) => builder.message(detail).emit(),
                None => builder.emit(),
            }
        }
    }
}

impl Visitor for StyleValidator {
    fn visit_formatted_argument(&mut self, arg: &FormattedArgument) {
        let (Some(style), Some(style_span)) = (&arg.style, arg.style_span) else {
            return;
        };
        if !is_custom_pattern(style) {
            return;
        }

        let issues = match arg.formatter() {
            FormatterKind::Number => patterns::number::validate(style),
            FormatterKind::Date | FormatterKind::Time => patterns::date::validate(style),
            _ => return,
        };
        tracing::debug!(argument = %arg.name, issues = issues.len(), "style checked");
        self.report(style_span.start, issues);
    }
}

/// Run the number pattern validator on a bare pattern.
pub fn validate_number_pattern(pattern: &str) -> ValidationResult {
    pattern_result(pattern, patterns::number::validate(pattern))
}

/// Run the date pattern validator on a bare pattern.
pub fn validate_date_pattern(pattern: &str) -> ValidationResult {
    pattern_result(pattern, patterns::date::validate(pattern))
}

fn pattern_result(pattern: &str, issues: Vec<PatternIssue>) -> ValidationResult {
    let mut validator = StyleValidator::new(pattern);
    validator.report(0, issues);
    validator.result
}
