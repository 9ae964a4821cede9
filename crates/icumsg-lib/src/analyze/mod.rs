//! Passes over a parsed message.
//!
//! Each pass is a [`Visitor`] that reads the tree without changing it:
//! - [`TypeInferer`]: argument name → inferred type
//! - [`SemanticValidator`]: `other` options, duplicate selectors, empty options
//! - [`StyleValidator`]: number and date pattern styles

pub mod infer;
pub mod styles;
pub mod validation;
pub mod visitor;

#[cfg(test)]
mod infer_tests;
#[cfg(test)]
mod styles_tests;

pub use infer::{ArgType, TypeInferer, TypeMap};
pub use styles::{StyleValidator, validate_date_pattern, validate_number_pattern};
pub use validation::SemanticValidator;
pub use visitor::Visitor;
