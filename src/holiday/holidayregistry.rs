use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::configuration::Configuration;
use crate::manager::manager::Manager;
use crate::translation::translationtable::TranslationTable;

use super::countryruleset::CountryRuleSet;
use super::countryyearresult::CountryYearResult;
use super::holidayerror::HolidayError;

pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 9999;

/// Immutable set of country rule tables plus the translations used to name
/// their records.
pub struct HolidayRegistry {
    countries: Manager<CountryRuleSet>,
    translations: Arc<TranslationTable>
}

impl HolidayRegistry {
    pub fn new(countries: Manager<CountryRuleSet>, translations: TranslationTable) -> HolidayRegistry {
        HolidayRegistry {
            countries,
            translations: Arc::new(translations)
        }
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    /// Looks a country up by name or code.
    pub fn country(&self, country: &str) -> Result<Arc<CountryRuleSet>, HolidayError> {
        self.countries
            .get(country)
            .map_err(|_| HolidayError::UnknownCountry(country.to_owned()))
    }

    /// Canonical names of all registered countries, sorted.
    pub fn country_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.countries.values().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn build_year(&self, country: &str, year: i32) -> Result<CountryYearResult, HolidayError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(HolidayError::invalid_year(year, MIN_YEAR, MAX_YEAR));
        }
        let rule_set = self.country(country)?;
        rule_set.build_year(year, &self.translations)
    }
}

static BUILTIN_REGISTRY: Lazy<Result<HolidayRegistry, String>> = Lazy::new(|| {
    Configuration::builtin()
        .map(Configuration::into_registry)
        .map_err(|error| {
            tracing::error!(%error, "bundled holiday data failed to load");
            error.to_string()
        })
});

/// Registry over the bundled country data, loaded on first use.
pub fn builtin_registry() -> Result<&'static HolidayRegistry, HolidayError> {
    BUILTIN_REGISTRY
        .as_ref()
        .map_err(|message| HolidayError::Configuration(message.clone()))
}

/// Every holiday of `country` in `year` from the bundled data.
pub fn build_year(country: &str, year: i32) -> Result<CountryYearResult, HolidayError> {
    builtin_registry()?.build_year(country, year)
}
