//! Structural checks on select, plural, and selectordinal arguments.
//!
//! - every argument needs an `other` option
//! - selectors must be unique within an argument
//! - option messages must not be empty

use std::collections::HashSet;
use std::sync::Arc;

use super::visitor::{Visitor, walk_choice, walk_plural, walk_select};
use crate::diagnostics::{DiagnosticKind, ValidationResult};
use crate::parser::ast::{Choice, Message, Node, Plural, Select, SelectOption, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContextKind {
    Select,
    Plural,
    SelectOrdinal,
    Choice,
}

impl ContextKind {
    fn keyword(self) -> &'static str {
        match self {
            ContextKind::Select => "select",
            ContextKind::Plural => "plural",
            ContextKind::SelectOrdinal => "selectordinal",
            ContextKind::Choice => "choice",
        }
    }
}

#[derive(Debug, Clone)]
struct Context {
    kind: ContextKind,
    name: String,
}

/// Visitor that reports structural findings into a [`ValidationResult`].
#[derive(Debug)]
pub struct SemanticValidator {
    source: Arc<str>,
    stack: Vec<Context>,
    result: ValidationResult,
}

impl SemanticValidator {
    pub fn new(source: &str) -> Self {
        Self {
            source: Arc::from(source),
            stack: Vec::new(),
            result: ValidationResult::new(),
        }
    }

    pub fn validate(mut self, message: &Message) -> ValidationResult {
        self.visit_message(message);
        self.result
    }

    /// `plural `count``, followed by the enclosing arguments, innermost first.
    fn describe(&self) -> String {
        let mut contexts = self.stack.iter().rev();
        let Some(current) = contexts.next() else {
            return String::new();
        };
        let mut out = format!("{} `{}`", current.kind.keyword(), current.name);
        for outer in contexts {
            out.push_str(&format!(" in {} `{}`", outer.kind.keyword(), outer.name));
        }
        out
    }

    fn check_options(&mut self, span: Span, options: &[SelectOption]) {
        if !options.iter().any(|o| o.selector == "other") {
            let detail = self.describe();
            self.result
                .report(DiagnosticKind::MissingOther, span.start, &self.source)
                .message(detail)
                .emit();
        }

        let mut seen = HashSet::new();
        for option in options {
            if !seen.insert(option.selector.as_str()) {
                let detail = format!("`{}` in {}", option.selector, self.describe());
                self.result
                    .report(DiagnosticKind::DuplicateOption, option.span.start, &self.source)
                    .message(detail)
                    .emit();
            }
        }
    }

    fn with_context(&mut self, kind: ContextKind, name: &str, f: impl FnOnce(&mut Self)) {
        self.stack.push(Context {
            kind,
            name: name.to_string(),
        });
        f(self);
        self.stack.pop();
    }
}

/// No parts, or only whitespace text. A `#` counts as content.
pub fn is_empty_message(message: &Message) -> bool {
    message.parts.iter().all(|part| match part {
        Node::Text(text) => text.value.trim().is_empty(),
        _ => false,
    })
}

impl Visitor for SemanticValidator {
    fn visit_select(&mut self, select: &Select) {
        self.with_context(ContextKind::Select, &select.name, |v| {
            v.check_options(select.span, &select.options);
            walk_select(v, select);
        });
    }

    fn visit_plural(&mut self, plural: &Plural) {
        self.with_context(ContextKind::Plural, &plural.name, |v| {
            v.check_options(plural.span, &plural.options);
            walk_plural(v, plural);
        });
    }

    fn visit_select_ordinal(&mut self, ordinal: &Plural) {
        self.with_context(ContextKind::SelectOrdinal, &ordinal.name, |v| {
            v.check_options(ordinal.span, &ordinal.options);
            walk_plural(v, ordinal);
        });
    }

    fn visit_choice(&mut self, choice: &Choice) {
        self.with_context(ContextKind::Choice, &choice.name, |v| walk_choice(v, choice));
    }

    fn visit_option(&mut self, option: &SelectOption) {
        if is_empty_message(&option.message) {
            let detail = format!("`{}` of {}", option.selector, self.describe());
            self.result
                .report(DiagnosticKind::EmptyOption, option.span.start, &self.source)
                .message(detail)
                .emit();
        }
        self.visit_message(&option.message);
    }
}
