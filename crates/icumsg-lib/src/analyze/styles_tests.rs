use super::styles::is_custom_pattern;
use crate::analyze::validate_number_pattern;
use crate::diagnostics::ValidationResult;
use crate::{parse, validate_styles};

fn check(source: &str) -> ValidationResult {
    validate_styles(&parse(source).unwrap(), source)
}

fn plain(source: &str) -> String {
    check(source).printer().plain(true).render()
}

#[test]
fn keyword_and_skeleton_styles_are_skipped() {
    assert!(!is_custom_pattern("integer"));
    assert!(!is_custom_pattern("short"));
    assert!(!is_custom_pattern("::currency/USD"));
    assert!(is_custom_pattern("#,##0.00"));

    assert!(check("{n, number, integer} {d, date, full} {n, number, ::percent}").is_empty());
}

#[test]
fn number_style_positions_are_absolute() {
    insta::assert_snapshot!(plain("{n, number, #.#.#}"), @"error[validator.multiple_decimals] at 15: number pattern has more than one decimal separator");
}

#[test]
fn date_style_findings() {
    insta::assert_snapshot!(plain("{d, date, yyyy-MM-DD} {t, time, HH:mm}"), @"warning[validator.day_of_year_with_month] at 18: day of year (`D`) combined with month (`M`): did you mean `d` (day of month)?");
}

#[test]
fn nested_styles_are_checked() {
    let result = check("{n, plural, other {{n, number, 0;0;0}}}");
    assert_eq!(result.codes(), ["validator.too_many_subpatterns"]);
    assert_eq!(result.iter().next().unwrap().position(), 34);
}

#[test]
fn other_formatters_are_ignored() {
    assert!(check("{n, spellout, %spellout-ordinal} {x, list, abc}").is_empty());
}

#[test]
fn bare_number_pattern() {
    let result = validate_number_pattern("0;0;0");
    insta::assert_snapshot!(result.printer().plain(true).render(), @"error[validator.too_many_subpatterns] at 3: number pattern has more than two subpatterns: found 3");
    insta::assert_snapshot!(result.iter().next().unwrap().snippet(), @r"
    0;0;0
       ^
    ");
}
