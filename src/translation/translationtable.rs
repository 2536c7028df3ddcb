use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::nameresolver::DEFAULT_LOCALE;

/// Key of the pattern used to name observed-day records.
pub const SUBSTITUTE_HOLIDAY_KEY: &str = "substituteHoliday";
const NAME_PLACEHOLDER: &str = "{name}";

/// Read-only holiday key -> locale -> display name lookup.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<String, BTreeMap<String, String>>
}

impl TranslationTable {
    pub fn new(entries: HashMap<String, BTreeMap<String, String>>) -> TranslationTable {
        TranslationTable { entries }
    }

    pub fn get(&self, key: &str, locale: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|names| names.get(locale))
            .map(String::as_str)
    }

    /// All names known for `key`; empty when the key is untranslated.
    pub fn names_for(&self, key: &str) -> BTreeMap<String, String> {
        self.entries.get(key).cloned().unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the observed-day record of a holiday, one per locale of
    /// `base_names`.
    pub fn substitute_names(&self, base_names: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        base_names
            .iter()
            .map(|(locale, name)| {
                let pattern = self.get(SUBSTITUTE_HOLIDAY_KEY, locale)
                    .or_else(|| self.get(SUBSTITUTE_HOLIDAY_KEY, DEFAULT_LOCALE))
                    .unwrap_or(NAME_PLACEHOLDER);
                (locale.clone(), pattern.replace(NAME_PLACEHOLDER, name))
            })
            .collect()
    }

    pub fn merge(&mut self, other: TranslationTable) {
        for (key, names) in other.entries {
            self.entries.entry(key).or_default().extend(names);
        }
    }
}
