//! Built-in plural rules used when no host pluralizer covers a locale.
//!
//! Each rule is either a single guard for the first listed category (anything
//! else is `other`), or a right-associative ternary chain whose leaves are
//! indices into the category list.

use super::category::PluralCategory::{self, Few, Many, One, Other, Two, Zero};
use super::expr::{self, ExprError, is_truthy};
use super::operands::PluralOperands;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub categories: &'static [PluralCategory],
    pub rule: &'static str,
}

impl RuleSet {
    const fn new(categories: &'static [PluralCategory], rule: &'static str) -> Self {
        Self { categories, rule }
    }

    pub fn select(&self, operands: &PluralOperands) -> Result<PluralCategory, ExprError> {
        if !self.rule.contains('?') {
            let matched = is_truthy(expr::evaluate(self.rule, operands)?);
            let first = self.categories.first().copied().unwrap_or(Other);
            return Ok(if matched { first } else { Other });
        }
        let index = evaluate_ternary(self.rule, operands)?;
        Ok(self.categories.get(index).copied().unwrap_or(Other))
    }
}

const ONE_OTHER: &[PluralCategory] = &[One, Other];
const ONE_MANY_OTHER: &[PluralCategory] = &[One, Many, Other];
const ONLY_OTHER: &[PluralCategory] = &[Other];

const EAST_SLAVIC: RuleSet = RuleSet::new(
    &[One, Few, Many, Other],
    "v == 0 && i % 10 == 1 && i % 100 != 11 ? 0 \
     : v == 0 && i % 10 >= 2 && i % 10 <= 4 && (i % 100 < 12 || i % 100 > 14) ? 1 \
     : v == 0 && (i % 10 == 0 || (i % 10 >= 5 && i % 10 <= 9) || (i % 100 >= 11 && i % 100 <= 14)) ? 2 \
     : 3",
);

const NO_PLURALS: RuleSet = RuleSet::new(ONLY_OTHER, "0");

static CARDINAL: &[(&str, RuleSet)] = &[
    ("en", RuleSet::new(ONE_OTHER, "i == 1 && v == 0")),
    (
        "fr",
        RuleSet::new(
            ONE_MANY_OTHER,
            concat!("i == 0 || i == 1 ? 0 : ", "i != 0 && i % 1000000 == 0 && v == 0", " ? 1 : 2"),
        ),
    ),
    ("de", RuleSet::new(ONE_OTHER, "i == 1 && v == 0")),
    (
        "es",
        RuleSet::new(
            ONE_MANY_OTHER,
            concat!("n == 1 ? 0 : ", "i != 0 && i % 1000000 == 0 && v == 0", " ? 1 : 2"),
        ),
    ),
    (
        "ar",
        RuleSet::new(
            &[Zero, One, Two, Few, Many, Other],
            "n == 0 ? 0 : n == 1 ? 1 : n == 2 ? 2 \
             : v == 0 && n % 100 >= 3 && n % 100 <= 10 ? 3 \
             : v == 0 && n % 100 >= 11 && n % 100 <= 99 ? 4 \
             : 5",
        ),
    ),
    ("ru", EAST_SLAVIC),
    ("uk", EAST_SLAVIC),
    ("ja", NO_PLURALS),
    ("zh", NO_PLURALS),
    ("ko", NO_PLURALS),
    ("tr", RuleSet::new(ONE_OTHER, "n == 1")),
    (
        "pl",
        RuleSet::new(
            &[One, Few, Many, Other],
            "i == 1 && v == 0 ? 0 \
             : v == 0 && i % 10 >= 2 && i % 10 <= 4 && (i % 100 < 12 || i % 100 > 14) ? 1 \
             : v == 0 && ((i != 1 && i % 10 <= 1) || (i % 10 >= 5 && i % 10 <= 9) || (i % 100 >= 12 && i % 100 <= 14)) ? 2 \
             : 3",
        ),
    ),
    (
        "pt",
        RuleSet::new(
            ONE_MANY_OTHER,
            concat!("i == 0 || i == 1 ? 0 : ", "i != 0 && i % 1000000 == 0 && v == 0", " ? 1 : 2"),
        ),
    ),
    (
        "it",
        RuleSet::new(
            ONE_MANY_OTHER,
            concat!("i == 1 && v == 0 ? 0 : ", "i != 0 && i % 1000000 == 0 && v == 0", " ? 1 : 2"),
        ),
    ),
    ("hi", RuleSet::new(ONE_OTHER, "i == 0 || n == 1")),
    ("id", NO_PLURALS),
    ("vi", NO_PLURALS),
    (
        "he",
        RuleSet::new(
            &[One, Two, Other],
            "(i == 1 && v == 0) || (i == 0 && v != 0) ? 0 : i == 2 && v == 0 ? 1 : 2",
        ),
    ),
];

static ORDINAL: &[(&str, RuleSet)] = &[
    (
        "en",
        RuleSet::new(
            &[One, Two, Few, Other],
            "n % 10 == 1 && n % 100 != 11 ? 0 \
             : n % 10 == 2 && n % 100 != 12 ? 1 \
             : n % 10 == 3 && n % 100 != 13 ? 2 \
             : 3",
        ),
    ),
    ("fr", RuleSet::new(ONE_OTHER, "n == 1")),
];

/// Whether the built-in table has cardinal rules for exactly `language`.
pub fn has_language(language: &str) -> bool {
    CARDINAL.iter().any(|(lang, _)| *lang == language)
}

/// Every language the built-in table covers.
pub fn languages() -> impl Iterator<Item = &'static str> {
    CARDINAL.iter().map(|(lang, _)| *lang)
}

/// Rule set for `language`.
///
/// Unknown languages get English. Known languages without an ordinal table
/// have a single `other` ordinal category.
pub fn lookup(language: &str, ordinal: bool) -> &'static RuleSet {
    let find = |table: &'static [(&str, RuleSet)]| {
        table
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, rules)| rules)
    };

    if ordinal {
        return match find(ORDINAL) {
            Some(rules) => rules,
            None if has_language(language) => &NO_PLURALS,
            None => &ORDINAL[0].1,
        };
    }

    find(CARDINAL).unwrap_or(&CARDINAL[0].1)
}

fn evaluate_ternary(rule: &str, operands: &PluralOperands) -> Result<usize, ExprError> {
    let Some(question) = find_unnested(rule, '?') else {
        let value = expr::evaluate(rule, operands)?;
        return Ok(if value.is_finite() && value >= 0.0 {
            value as usize
        } else {
            usize::MAX
        });
    };

    let condition = &rule[..question];
    let rest = &rule[question + 1..];
    let colon = find_matching_colon(rest).ok_or(ExprError::MissingColon)?;

    let branch = if is_truthy(expr::evaluate(condition, operands)?) {
        &rest[..colon]
    } else {
        &rest[colon + 1..]
    };
    evaluate_ternary(branch, operands)
}

/// Byte offset of the first `target` outside parentheses and quotes.
fn find_unnested(rule: &str, target: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (offset, c) in rule.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if c == target && depth == 0 => return Some(offset),
            _ => {}
        }
    }
    None
}

/// Byte offset of the `:` that closes the branch opened by a `?`,
/// skipping over nested `? :` pairs.
fn find_matching_colon(rest: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut nested = 0usize;
    let mut quote: Option<char> = None;
    for (offset, c) in rest.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '?' if depth == 0 => nested += 1,
            ':' if depth == 0 && nested == 0 => return Some(offset),
            ':' if depth == 0 => nested -= 1,
            _ => {}
        }
    }
    None
}
