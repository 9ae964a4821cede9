//! Decimal format patterns such as `#,##0.00;(#,##0.00)`.

use super::{PatternIssue, scan};
use crate::diagnostics::DiagnosticKind;

const MAX_SUBPATTERNS: usize = 2;

/// Check a number pattern.
///
/// - at most a positive and a negative subpattern, split by `;`
/// - each subpattern has a digit placeholder (`0`, `#`, or `@`)
/// - each subpattern has at most one `.` and at most one exponent (`E`/`e`)
pub fn validate(pattern: &str) -> Vec<PatternIssue> {
    let scan = scan(pattern);
    if let Some(offset) = scan.unterminated_at {
        return vec![PatternIssue::new(DiagnosticKind::UnterminatedQuote, offset)];
    }

    let mut subpatterns: Vec<Vec<(usize, char)>> = vec![Vec::new()];
    let mut starts = vec![0];
    for &(offset, c) in &scan.symbols {
        if c == ';' {
            subpatterns.push(Vec::new());
            starts.push(offset + 1);
        } else if let Some(current) = subpatterns.last_mut() {
            current.push((offset, c));
        }
    }

    let mut issues = Vec::new();
    if subpatterns.len() > MAX_SUBPATTERNS {
        let offset = starts[MAX_SUBPATTERNS] - 1;
        issues.push(
            PatternIssue::new(DiagnosticKind::TooManySubpatterns, offset)
                .with_detail(format!("found {}", subpatterns.len())),
        );
        return issues;
    }

    for (symbols, start) in subpatterns.iter().zip(starts) {
        if !symbols.iter().any(|&(_, c)| matches!(c, '0' | '#' | '@')) {
            issues.push(PatternIssue::new(DiagnosticKind::NoDigitPlaceholder, start));
        }
        if let Some(&(offset, _)) = symbols.iter().filter(|&&(_, c)| c == '.').nth(1) {
            issues.push(PatternIssue::new(DiagnosticKind::MultipleDecimals, offset));
        }
        if let Some(&(offset, _)) = symbols.iter().filter(|&&(_, c)| matches!(c, 'E' | 'e')).nth(1) {
            issues.push(PatternIssue::new(DiagnosticKind::MultipleExponents, offset));
        }
    }
    issues
}
