use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use super::category::PluralCategory;
use super::host::HostPluralizer;
use super::locale;
use super::operands::PluralOperands;
use super::table;

/// Integers probed when discovering which categories a host locale uses.
const SAMPLE_INTEGERS: std::ops::RangeInclusive<u32> = 0..=200;

/// Fractions probed after the integers; they reach `v != 0` branches.
const SAMPLE_FRACTIONS: [f64; 5] = [0.5, 1.5, 2.5, 0.1, 1.1];

const DEFAULT_LOCALE: &str = "en";

/// Memo of discovered categories per `(locale, ordinal)`.
///
/// Populate-once: concurrent writers for the same key store equal values.
#[derive(Debug, Default)]
pub struct PluralCache {
    categories: RwLock<HashMap<(String, bool), Arc<[PluralCategory]>>>,
}

impl PluralCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: &str, ordinal: bool) -> Option<Arc<[PluralCategory]>> {
        let map = self
            .categories
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        map.get(&(locale.to_string(), ordinal)).cloned()
    }

    pub fn insert(&self, locale: &str, ordinal: bool, categories: Arc<[PluralCategory]>) {
        let mut map = self
            .categories
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        map.insert((locale.to_string(), ordinal), categories);
    }

    pub fn len(&self) -> usize {
        self.categories
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Locale-keyed plural category selection.
///
/// ```
/// use icumsg_core::plural::{PluralCategory, PluralRules};
///
/// let rules = PluralRules::new();
/// assert_eq!(rules.select(1.0, "en", false), PluralCategory::One);
/// assert_eq!(rules.select(0.0, "fr", false), PluralCategory::One);
/// ```
#[derive(Default)]
pub struct PluralRules {
    host: Option<Box<dyn HostPluralizer>>,
    cache: PluralCache,
}

impl std::fmt::Debug for PluralRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluralRules")
            .field("host", &self.host.is_some())
            .field("cache", &self.cache)
            .finish()
    }
}

impl PluralRules {
    /// Engine using only the built-in table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that consults `host` before the built-in table.
    pub fn with_host(host: Box<dyn HostPluralizer>) -> Self {
        Self {
            host: Some(host),
            cache: PluralCache::new(),
        }
    }

    pub fn cache(&self) -> &PluralCache {
        &self.cache
    }

    /// Canonical form of `locale` that this engine has rules for.
    pub fn resolve(&self, locale: &str) -> String {
        resolve_locale(locale, self.host.as_deref())
    }

    /// Categories `locale` uses, in CLDR order.
    pub fn categories(&self, locale: &str, ordinal: bool) -> Arc<[PluralCategory]> {
        let resolved = self.resolve(locale);
        if let Some(hit) = self.cache.get(&resolved, ordinal) {
            return hit;
        }

        let categories: Arc<[PluralCategory]> = match self.host_categories(&resolved, ordinal) {
            Some(found) => found.into(),
            None => table::lookup(locale::language(&resolved), ordinal)
                .categories
                .into(),
        };
        tracing::debug!(
            locale = %resolved,
            ordinal,
            count = categories.len(),
            "plural categories cached"
        );
        self.cache.insert(&resolved, ordinal, Arc::clone(&categories));
        categories
    }

    /// Category names `locale` uses, in CLDR order.
    pub fn category_names(&self, locale: &str, ordinal: bool) -> Vec<&'static str> {
        self.categories(locale, ordinal)
            .iter()
            .map(|c| c.as_str())
            .collect()
    }

    /// Category of `number` in `locale`.
    pub fn select(&self, number: f64, locale: &str, ordinal: bool) -> PluralCategory {
        let resolved = self.resolve(locale);

        let host = self.host.as_deref().filter(|h| h.supports(&resolved, ordinal));
        if let Some(host) = host {
            match host.select(&resolved, number, ordinal) {
                Ok(category) => return category,
                Err(err) => {
                    tracing::warn!(%err, "host pluralizer failed, using built-in rules");
                }
            }
        }

        let rules = table::lookup(locale::language(&resolved), ordinal);
        let operands = PluralOperands::from_f64(number);
        match rules.select(&operands) {
            Ok(category) => category,
            Err(err) => {
                tracing::warn!(locale = %resolved, rule = rules.rule, %err, "plural rule failed");
                PluralCategory::Other
            }
        }
    }

    fn host_categories(&self, resolved: &str, ordinal: bool) -> Option<Vec<PluralCategory>> {
        let host = self.host.as_deref().filter(|h| h.supports(resolved, ordinal))?;

        let samples = SAMPLE_INTEGERS
            .map(f64::from)
            .chain(SAMPLE_FRACTIONS);

        let mut found = BTreeSet::from([PluralCategory::Other]);
        for number in samples {
            match host.select(resolved, number, ordinal) {
                Ok(category) => {
                    found.insert(category);
                }
                Err(err) => {
                    tracing::warn!(%err, "host pluralizer failed, using built-in rules");
                    return None;
                }
            }
        }
        Some(found.into_iter().collect())
    }
}

/// Resolve `locale` to the most specific tag with known rules, or `en`.
///
/// A tag is known when `host` has cardinal data for it or when its language has an entry
/// in the built-in table.
pub fn resolve_locale(locale: &str, host: Option<&dyn HostPluralizer>) -> String {
    let canonical = locale::canonicalize(locale);
    for candidate in locale::fallback_chain(&canonical) {
        let host_knows = host.is_some_and(|h| h.supports(candidate, false));
        if host_knows || table::has_language(candidate) {
            tracing::debug!(input = locale, resolved = candidate, "plural locale resolved");
            return candidate.to_string();
        }
    }
    tracing::debug!(input = locale, "unknown plural locale, using default");
    DEFAULT_LOCALE.to_string()
}
