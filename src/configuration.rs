use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use crate::holiday::countryruleset::CountryRuleSet;
use crate::holiday::countryrulesetloader::CountryRuleSetLoader;
use crate::holiday::holidayregistry::HolidayRegistry;
use crate::manager::manager::{IManager, ManagerBuilder};
use crate::manager::managererror::ManagerError;
use crate::translation::translationtable::TranslationTable;

const BUILTIN_TRANSLATIONS: &str = include_str!("../data/translations.json");

const BUILTIN_COUNTRIES: [&str; 7] = [
    include_str!("../data/countries/belgium.json"),
    include_str!("../data/countries/france.json"),
    include_str!("../data/countries/italy.json"),
    include_str!("../data/countries/japan.json"),
    include_str!("../data/countries/netherlands.json"),
    include_str!("../data/countries/united_kingdom.json"),
    include_str!("../data/countries/usa.json")
];

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    countries: Vec<serde_json::Value>,
    #[serde(default)]
    translations: TranslationTable
}

/// Collects country rule sets and translations before freezing them into a
/// [`HolidayRegistry`].
pub struct Configuration {
    country_builder: ManagerBuilder<CountryRuleSet>,
    translations: TranslationTable
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            country_builder: ManagerBuilder::new(),
            translations: TranslationTable::default()
        }
    }

    /// Configuration holding the bundled countries and translations.
    pub fn builtin() -> Result<Configuration, ManagerError> {
        let mut config = Configuration::new();
        config.translations = serde_json::from_str(BUILTIN_TRANSLATIONS)?;
        for country_json in BUILTIN_COUNTRIES {
            let json_value: serde_json::Value = serde_json::from_str(country_json)?;
            CountryRuleSetLoader.insert_obj_from_json(&mut config.country_builder, json_value)?;
        }
        Ok(config)
    }

    /// Adds the `countries` and `translations` of a JSON file.
    pub fn from_reader(&mut self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.add(json_prop)
    }

    pub fn load_str(&mut self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.add(json_prop)
    }

    /// Adds a file holding one country object or an array of them.
    pub fn add_countries_from_reader(&mut self, file_path: &str) -> Result<(), ManagerError> {
        CountryRuleSetLoader.from_reader(&mut self.country_builder, file_path)
    }

    pub fn add_translations(&mut self, translations: TranslationTable) {
        self.translations.merge(translations);
    }

    fn add(&mut self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        CountryRuleSetLoader.insert_obj_from_json_vec(&mut self.country_builder, &json_prop.countries)?;
        self.translations.merge(json_prop.translations);
        tracing::info!(countries = json_prop.countries.len(), "configuration loaded");
        Ok(())
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    pub fn into_registry(self) -> HolidayRegistry {
        HolidayRegistry::new(self.country_builder.build(), self.translations)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
