//! Parameter type inference.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::visitor::{Visitor, walk_choice, walk_plural, walk_select};
use crate::parser::ast::{Choice, FormattedArgument, Message, Plural, Select, SimpleArgument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    String,
    Number,
    DateTime,
    Mixed,
}

impl ArgType {
    pub fn as_str(self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Number => "number",
            ArgType::DateTime => "datetime",
            ArgType::Mixed => "mixed",
        }
    }

    /// Combine two observations of the same argument.
    pub fn merge(self, other: ArgType) -> ArgType {
        if self == other { self } else { ArgType::Mixed }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Argument name → inferred type, in order of first appearance.
///
/// Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeMap {
    types: IndexMap<String, ArgType>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<ArgType> {
        self.types.get(name).copied()
    }

    pub fn all(&self) -> &IndexMap<String, ArgType> {
        &self.types
    }

    /// Record one observation; conflicting observations collapse to `mixed`.
    pub fn record(&mut self, name: &str, ty: ArgType) {
        match self.types.get_mut(name) {
            Some(existing) => *existing = existing.merge(ty),
            None => {
                self.types.insert(name.to_string(), ty);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ArgType)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), *ty))
    }
}

/// Visitor that builds a [`TypeMap`].
#[derive(Debug, Default)]
pub struct TypeInferer {
    types: TypeMap,
}

impl TypeInferer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infer(mut self, message: &Message) -> TypeMap {
        self.visit_message(message);
        self.types
    }
}

impl Visitor for TypeInferer {
    fn visit_simple_argument(&mut self, arg: &SimpleArgument) {
        self.types.record(&arg.name, ArgType::String);
    }

    fn visit_formatted_argument(&mut self, arg: &FormattedArgument) {
        let formatter = arg.formatter();
        let ty = if formatter.is_numeric() {
            ArgType::Number
        } else if formatter.is_temporal() {
            ArgType::DateTime
        } else {
            ArgType::String
        };
        self.types.record(&arg.name, ty);
    }

    fn visit_select(&mut self, select: &Select) {
        self.types.record(&select.name, ArgType::String);
        walk_select(self, select);
    }

    fn visit_plural(&mut self, plural: &Plural) {
        self.types.record(&plural.name, ArgType::Number);
        walk_plural(self, plural);
    }

    fn visit_select_ordinal(&mut self, ordinal: &Plural) {
        self.types.record(&ordinal.name, ArgType::Number);
        walk_plural(self, ordinal);
    }

    fn visit_choice(&mut self, choice: &Choice) {
        self.types.record(&choice.name, ArgType::Number);
        walk_choice(self, choice);
    }
}
