use std::collections::HashSet;

use chrono::{
    Datelike,
    NaiveDate
};

use crate::time::recurringholiday::recurringholiday::compute_date;
use crate::time::recurringholiday::substitution::shift_date;
use crate::translation::translationtable::TranslationTable;

use super::countryyearresult::CountryYearResult;
use super::holidayerror::HolidayError;
use super::holidayrecord::HolidayRecord;
use super::holidayrule::{HolidayRule, ObservedMode};

/// Declared holiday rules of one country.
pub struct CountryRuleSet {
    name: String,
    code: Option<String>,
    timezone: String,
    default_locale: String,
    avoid_collisions: bool,
    rules: Vec<HolidayRule>
}

impl CountryRuleSet {
    pub fn new(name: String,
               code: Option<String>,
               timezone: String,
               default_locale: String,
               avoid_collisions: bool,
               rules: Vec<HolidayRule>) -> CountryRuleSet {
        CountryRuleSet { name, code, timezone, default_locale, avoid_collisions, rules }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn avoid_collisions(&self) -> bool {
        self.avoid_collisions
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Keys declared by more than one rule with overlapping effective years.
    pub fn overlapping_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        for (i, a) in self.rules.iter().enumerate() {
            let clashes = self.rules[i + 1..]
                .iter()
                .any(|b| a.key() == b.key() && a.effective_years().overlaps(b.effective_years()));
            if clashes && !keys.contains(&a.key()) {
                keys.push(a.key());
            }
        }
        keys
    }

    /// Observed date of a holiday nominally on `nominal`.
    ///
    /// With collision avoidance on, the date keeps moving in the direction of
    /// the policy's shift while it sits on a rest day or on a taken date.
    fn observe(&self, rule: &HolidayRule, nominal: NaiveDate, taken: &HashSet<NaiveDate>) -> NaiveDate {
        let observed = rule.substitution().adjust(nominal);
        if observed == nominal || !self.avoid_collisions {
            return observed;
        }

        let step = if observed > nominal { 1 } else { -1 };
        let policy = rule.substitution().policy();
        let mut d = observed;
        while taken.contains(&d) || policy.is_rest_day(d.weekday()) {
            d = shift_date(d, step);
        }
        d
    }

    pub fn build_year(&self, year: i32, translations: &TranslationTable) -> Result<CountryYearResult, HolidayError> {
        let timezone = self.timezone.as_str();

        let mut nominal: Vec<(&HolidayRule, NaiveDate)> = Vec::with_capacity(self.rules.len());
        for rule in self.rules.iter() {
            match rule.nominal_date(year, timezone)? {
                Some(date) => nominal.push((rule, date)),
                None => tracing::trace!(country = %self.name, year, key = rule.key(), "outside effective years")
            }
        }

        let mut taken: HashSet<NaiveDate> = nominal
            .iter()
            .filter(|(rule, _)| rule.holiday_type().is_day_off())
            .map(|&(_, date)| date)
            .collect();

        let mut result = CountryYearResult::new(self.name.clone(), year, self.default_locale.clone());
        for &(rule, date) in nominal.iter() {
            let date = if rule.observed() == ObservedMode::Shift && rule.substitutes_in(year) {
                let observed = self.observe(rule, date, &taken);
                if observed != date {
                    tracing::trace!(key = rule.key(), from = %date, to = %observed, "holiday shifted");
                    taken.insert(observed);
                }
                observed
            } else {
                date
            };
            result.insert(HolidayRecord::new(
                rule.key().to_owned(),
                date,
                rule.holiday_type(),
                rule.localized_names(translations)
            ))?;
        }

        // Observed days of neighbouring years may fall into this one.
        for rule in self.rules.iter().filter(|r| r.observed() == ObservedMode::Additional) {
            for source_year in [year - 1, year, year + 1] {
                if !rule.substitutes_in(source_year) {
                    continue;
                }
                let date = match rule.nominal_date(source_year, timezone) {
                    Ok(Some(date)) => date,
                    Ok(None) => continue,
                    Err(_) if source_year != year => continue,
                    Err(error) => return Err(error)
                };
                let observed = self.observe(rule, date, &taken);
                if observed == date || observed.year() != year {
                    continue;
                }
                taken.insert(observed);
                let names = translations.substitute_names(&rule.localized_names(translations));
                result.insert(HolidayRecord::new(rule.substitute_key(), observed, rule.holiday_type(), names))?;
            }
        }

        tracing::debug!(country = %self.name, year, timezone, holidays = result.len(), "built holiday year");
        Ok(result)
    }

    /// Nominal date of `key` in `year` without building the whole year.
    pub fn nominal_date(&self, key: &str, year: i32) -> Result<Option<NaiveDate>, HolidayError> {
        for rule in self.rules.iter().filter(|r| r.key() == key) {
            if rule.applies_in(year) {
                return compute_date(rule.date_rule(), year, &self.timezone).map(Some);
            }
        }
        Ok(None)
    }
}
