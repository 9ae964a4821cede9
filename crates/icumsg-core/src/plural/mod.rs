//! CLDR plural category selection.
//!
//! [`PluralRules`] resolves a locale, consults an optional
//! [`HostPluralizer`], and otherwise evaluates a built-in rule table against
//! the [`PluralOperands`] of the number.

mod category;
mod engine;
pub mod expr;
mod host;
pub mod locale;
mod operands;
pub mod table;

#[cfg(test)]
mod expr_tests;

pub use category::{PluralCategory, UnknownCategory};
pub use engine::{PluralCache, PluralRules, resolve_locale};
#[cfg(feature = "intl-pluralrules")]
pub use host::IntlPluralizer;
pub use host::{HostError, HostPluralizer};
pub use operands::PluralOperands;
