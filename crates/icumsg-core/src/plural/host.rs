//! Seam for an external CLDR implementation.
//!
//! [`PluralRules`](super::PluralRules) asks the host first and falls back to
//! the built-in table when the host does not know a locale or fails.

use super::category::PluralCategory;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("host pluralizer failed for `{locale}`: {reason}")]
pub struct HostError {
    pub locale: String,
    pub reason: String,
}

impl HostError {
    pub fn new(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            reason: reason.into(),
        }
    }
}

/// A pluralization service that can categorize numbers for some locales.
pub trait HostPluralizer: Send + Sync {
    /// Whether this host has cardinal or ordinal data for the canonical
    /// `locale` tag.
    fn supports(&self, locale: &str, ordinal: bool) -> bool;

    /// Category of `number` in `locale`.
    fn select(&self, locale: &str, number: f64, ordinal: bool)
    -> Result<PluralCategory, HostError>;
}

#[cfg(feature = "intl-pluralrules")]
pub use intl::IntlPluralizer;

#[cfg(feature = "intl-pluralrules")]
mod intl {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use intl_pluralrules::{PluralCategory as IntlCategory, PluralRuleType, PluralRules};
    use unic_langid::LanguageIdentifier;

    use super::{HostError, HostPluralizer};
    use crate::plural::PluralCategory;

    /// [`HostPluralizer`] backed by the `intl_pluralrules` CLDR data.
    #[derive(Default)]
    pub struct IntlPluralizer {
        rules: Mutex<HashMap<(String, bool), Arc<PluralRules>>>,
    }

    impl IntlPluralizer {
        pub fn new() -> Self {
            Self::default()
        }

        fn rules(&self, locale: &str, ordinal: bool) -> Result<Arc<PluralRules>, HostError> {
            let key = (locale.to_string(), ordinal);
            let mut cache = self
                .rules
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(rules) = cache.get(&key) {
                return Ok(Arc::clone(rules));
            }

            let langid: LanguageIdentifier = locale
                .parse()
                .map_err(|e| HostError::new(locale, format!("{e:?}")))?;
            let rules = PluralRules::create(langid, rule_type(ordinal))
                .map_err(|e| HostError::new(locale, e))?;
            let rules = Arc::new(rules);
            cache.insert(key, Arc::clone(&rules));
            Ok(rules)
        }
    }

    fn rule_type(ordinal: bool) -> PluralRuleType {
        if ordinal {
            PluralRuleType::ORDINAL
        } else {
            PluralRuleType::CARDINAL
        }
    }

    impl HostPluralizer for IntlPluralizer {
        fn supports(&self, locale: &str, ordinal: bool) -> bool {
            let Ok(langid) = locale.parse::<LanguageIdentifier>() else {
                return false;
            };
            PluralRules::get_locales(rule_type(ordinal)).contains(&langid)
        }

        fn select(
            &self,
            locale: &str,
            number: f64,
            ordinal: bool,
        ) -> Result<PluralCategory, HostError> {
            let rules = self.rules(locale, ordinal)?;
            let category = rules
                .select(number)
                .map_err(|e| HostError::new(locale, e))?;
            Ok(match category {
                IntlCategory::ZERO => PluralCategory::Zero,
                IntlCategory::ONE => PluralCategory::One,
                IntlCategory::TWO => PluralCategory::Two,
                IntlCategory::FEW => PluralCategory::Few,
                IntlCategory::MANY => PluralCategory::Many,
                IntlCategory::OTHER => PluralCategory::Other,
            })
        }
    }
}
