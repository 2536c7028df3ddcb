use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::translation::nameresolver::resolve_name;

use super::holidaytype::HolidayType;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HolidayRecord {
    key: String,
    date: NaiveDate,
    holiday_type: HolidayType,
    localized_names: BTreeMap<String, String>
}

impl HolidayRecord {
    pub fn new(key: String,
               date: NaiveDate,
               holiday_type: HolidayType,
               localized_names: BTreeMap<String, String>) -> HolidayRecord {
        HolidayRecord { key, date, holiday_type, localized_names }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    pub fn localized_names(&self) -> &BTreeMap<String, String> {
        &self.localized_names
    }

    pub fn name(&self, locale: &str) -> &str {
        resolve_name(self, locale)
    }
}

impl fmt::Display for HolidayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.key, self.holiday_type)
    }
}
