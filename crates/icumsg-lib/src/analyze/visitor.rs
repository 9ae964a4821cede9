//! Message tree visitor.
//!
//! # Usage
//!
//! Implement `Visitor` for your struct and override the `visit_*` methods you
//! need. Call the matching `walk_*` inside an override to keep descending, or
//! omit it to skip the subtree.
//!
//! ```
//! use icumsg_lib::analyze::Visitor;
//! use icumsg_lib::parser::ast::SimpleArgument;
//!
//! #[derive(Default)]
//! struct Names(Vec<String>);
//!
//! impl Visitor for Names {
//!     fn visit_simple_argument(&mut self, arg: &SimpleArgument) {
//!         self.0.push(arg.name.clone());
//!     }
//! }
//!
//! let message = icumsg_lib::parse("{a} and {b}").unwrap();
//! let mut names = Names::default();
//! names.visit_message(&message);
//! assert_eq!(names.0, ["a", "b"]);
//! ```

use crate::parser::ast::{
    Choice, ChoiceOption, FormattedArgument, Message, Node, Plural, Pound, Select, SelectOption,
    SimpleArgument, Text,
};

pub trait Visitor: Sized {
    fn visit_message(&mut self, message: &Message) {
        walk_message(self, message);
    }

    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }

    fn visit_text(&mut self, _text: &Text) {}

    fn visit_simple_argument(&mut self, _arg: &SimpleArgument) {}

    fn visit_formatted_argument(&mut self, _arg: &FormattedArgument) {}

    fn visit_select(&mut self, select: &Select) {
        walk_select(self, select);
    }

    fn visit_plural(&mut self, plural: &Plural) {
        walk_plural(self, plural);
    }

    fn visit_select_ordinal(&mut self, ordinal: &Plural) {
        walk_plural(self, ordinal);
    }

    fn visit_option(&mut self, option: &SelectOption) {
        walk_option(self, option);
    }

    fn visit_pound(&mut self, _pound: &Pound) {}

    fn visit_choice(&mut self, choice: &Choice) {
        walk_choice(self, choice);
    }

    fn visit_choice_option(&mut self, option: &ChoiceOption) {
        walk_choice_option(self, option);
    }
}

pub fn walk_message<V: Visitor>(visitor: &mut V, message: &Message) {
    for part in &message.parts {
        visitor.visit_node(part);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &Node) {
    match node {
        Node::Text(n) => visitor.visit_text(n),
        Node::SimpleArgument(n) => visitor.visit_simple_argument(n),
        Node::FormattedArgument(n) => visitor.visit_formatted_argument(n),
        Node::Select(n) => visitor.visit_select(n),
        Node::Plural(n) => visitor.visit_plural(n),
        Node::SelectOrdinal(n) => visitor.visit_select_ordinal(n),
        Node::Pound(n) => visitor.visit_pound(n),
        Node::Choice(n) => visitor.visit_choice(n),
    }
}

pub fn walk_select<V: Visitor>(visitor: &mut V, select: &Select) {
    for option in &select.options {
        visitor.visit_option(option);
    }
}

pub fn walk_plural<V: Visitor>(visitor: &mut V, plural: &Plural) {
    for option in &plural.options {
        visitor.visit_option(option);
    }
}

pub fn walk_option<V: Visitor>(visitor: &mut V, option: &SelectOption) {
    visitor.visit_message(&option.message);
}

pub fn walk_choice<V: Visitor>(visitor: &mut V, choice: &Choice) {
    for option in &choice.options {
        visitor.visit_choice_option(option);
    }
}

pub fn walk_choice_option<V: Visitor>(visitor: &mut V, option: &ChoiceOption) {
    visitor.visit_message(&option.message);
}
