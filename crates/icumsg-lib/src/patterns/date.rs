//! Date and time patterns such as `yyyy-MM-dd HH:mm`.
//!
//! Symbol combinations that are valid but almost always a mistake produce
//! warnings; only an unterminated quote is an error.

use super::{PatternIssue, scan};
use crate::diagnostics::DiagnosticKind;

pub fn validate(pattern: &str) -> Vec<PatternIssue> {
    let scan = scan(pattern);
    if let Some(offset) = scan.unterminated_at {
        return vec![PatternIssue::new(DiagnosticKind::UnterminatedQuote, offset)];
    }

    let find = |symbols: &[char]| {
        scan.symbols
            .iter()
            .find(|(_, c)| symbols.contains(c))
            .map(|&(offset, _)| offset)
    };

    let mut issues = Vec::new();

    if let (Some(day_of_year), Some(_)) = (find(&['D']), find(&['M', 'L'])) {
        issues.push(
            PatternIssue::new(DiagnosticKind::DayOfYearWithMonth, day_of_year)
                .with_detail("did you mean `d` (day of month)?"),
        );
    }

    if let (Some(week_year), Some(_)) = (find(&['Y']), find(&['M', 'L', 'd'])) {
        issues.push(
            PatternIssue::new(DiagnosticKind::WeekYearWithCalendarFields, week_year)
                .with_detail("did you mean `y` (calendar year)?"),
        );
    }

    issues
}
