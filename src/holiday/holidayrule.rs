use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::recurringholiday::effectiveyears::EffectiveYears;
use crate::time::recurringholiday::recurringholiday::{RecurringHoliday, compute_date};
use crate::time::recurringholiday::recurringholidaymanager::get_recurring_holiday_from_json;
use crate::time::recurringholiday::substitution::{
    SubstitutionPolicy,
    SubstitutionRule
};
use crate::translation::translationtable::{
    SUBSTITUTE_HOLIDAY_KEY,
    TranslationTable
};

use super::holidayerror::HolidayError;
use super::holidaytype::HolidayType;

/// How an observed date is reported.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum ObservedMode {
    /// The holiday itself moves to the observed date.
    #[default]
    Shift,
    /// The holiday stays put and a `substituteHoliday:<key>` record is added.
    Additional
}

/// One row of a country's rule table.
///
/// Several rows may share a key when a holiday changed its definition; their
/// effective years must then be disjoint.
#[derive(Clone)]
pub struct HolidayRule {
    key: String,
    date_rule: Arc<dyn RecurringHoliday>,
    holiday_type: HolidayType,
    effective_years: EffectiveYears,
    substitution: SubstitutionRule,
    substitute_from_year: Option<i32>,
    observed: ObservedMode,
    names: BTreeMap<String, String>
}

impl HolidayRule {
    pub fn new(key: String,
               date_rule: Arc<dyn RecurringHoliday>,
               holiday_type: HolidayType,
               effective_years: EffectiveYears) -> HolidayRule {
        HolidayRule {
            key,
            date_rule,
            holiday_type,
            effective_years,
            substitution: SubstitutionRule::new(SubstitutionPolicy::None),
            substitute_from_year: None,
            observed: ObservedMode::Shift,
            names: BTreeMap::new()
        }
    }

    pub fn with_substitution(mut self,
                             policy: SubstitutionPolicy,
                             observed: ObservedMode,
                             substitute_from_year: Option<i32>) -> HolidayRule {
        self.substitution = SubstitutionRule::new(policy);
        self.observed = observed;
        self.substitute_from_year = substitute_from_year;
        self
    }

    pub fn with_names(mut self, names: BTreeMap<String, String>) -> HolidayRule {
        self.names = names;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn substitute_key(&self) -> String {
        format!("{}:{}", SUBSTITUTE_HOLIDAY_KEY, self.key)
    }

    pub fn date_rule(&self) -> &dyn RecurringHoliday {
        self.date_rule.as_ref()
    }

    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    pub fn effective_years(&self) -> &EffectiveYears {
        &self.effective_years
    }

    pub fn substitution(&self) -> &SubstitutionRule {
        &self.substitution
    }

    pub fn observed(&self) -> ObservedMode {
        self.observed
    }

    pub fn applies_in(&self, year: i32) -> bool {
        self.effective_years.contains(year)
    }

    pub fn substitutes_in(&self, year: i32) -> bool {
        !self.substitution.is_unadjusted()
            && self.substitute_from_year.is_none_or(|from| year >= from)
    }

    /// Nominal date in `year`, `None` when the guard excludes the year.
    pub fn nominal_date(&self, year: i32, timezone: &str) -> Result<Option<NaiveDate>, HolidayError> {
        if !self.applies_in(year) {
            return Ok(None);
        }
        compute_date(self.date_rule(), year, timezone).map(Some)
    }

    /// Table names with this rule's overrides on top.
    pub fn localized_names(&self, translations: &TranslationTable) -> BTreeMap<String, String> {
        let mut names = translations.names_for(&self.key);
        names.extend(self.names.iter().map(|(l, n)| (l.clone(), n.clone())));
        names
    }
}

#[derive(Deserialize)]
struct HolidayRuleJsonProp {
    key: String,
    #[serde(default)]
    holiday_type: HolidayType,
    #[serde(default)]
    from_year: Option<i32>,
    #[serde(default)]
    until_year: Option<i32>,
    #[serde(default)]
    substitution: SubstitutionPolicy,
    #[serde(default)]
    substitute_from_year: Option<i32>,
    #[serde(default)]
    observed: ObservedMode,
    #[serde(default)]
    names: BTreeMap<String, String>
}

pub fn holiday_rule_from_json(json: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let json_prop: HolidayRuleJsonProp = parse_json_value(json.clone())?;
    let date_rule = get_recurring_holiday_from_json(&json_prop.key, json)?;
    let effective_years = EffectiveYears::new(json_prop.from_year, json_prop.until_year)
        .ok_or_else(|| ManagerError::invalid_rule(&json_prop.key, "from_year is after until_year"))?;

    Ok(HolidayRule::new(json_prop.key, date_rule, json_prop.holiday_type, effective_years)
        .with_substitution(json_prop.substitution, json_prop.observed, json_prop.substitute_from_year)
        .with_names(json_prop.names))
}
