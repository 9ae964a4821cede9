//! Shared primitives for icumsg.
//!
//! - [`plural`]: CLDR plural category selection with a built-in rule table
//!   and an optional host pluralizer
//! - [`Colors`]: ANSI escapes for terminal output

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod colors;
pub mod plural;


pub use colors::Colors;
pub use plural::{PluralCategory, PluralRules};
