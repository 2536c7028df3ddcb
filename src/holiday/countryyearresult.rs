use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate
};

use crate::filter::holidayfilter::{HolidayFilter, filter};
use crate::translation::nameresolver::resolve_name_or;

use super::holidayerror::HolidayError;
use super::holidayrecord::HolidayRecord;
use super::holidaytype::HolidayType;

/// Every holiday of one country in one year, in rule declaration order.
#[derive(Clone, Debug)]
pub struct CountryYearResult {
    country: String,
    year: i32,
    locale: String,
    records: Vec<HolidayRecord>,
    index: HashMap<String, usize>
}

impl CountryYearResult {
    pub fn new(country: String, year: i32, locale: String) -> CountryYearResult {
        CountryYearResult {
            country,
            year,
            locale,
            records: Vec::new(),
            index: HashMap::new()
        }
    }

    pub(crate) fn insert(&mut self, record: HolidayRecord) -> Result<(), HolidayError> {
        if self.index.contains_key(record.key()) {
            return Err(HolidayError::DuplicateKey {
                country: self.country.clone(),
                year: self.year,
                key: record.key().to_owned()
            });
        }
        self.index.insert(record.key().to_owned(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Default display locale of the country.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Name of `key` in `locale`, falling back to the country locale.
    pub fn name_in(&self, key: &str, locale: &str) -> Option<&str> {
        self.get(key).map(|r| resolve_name_or(r, locale, &self.locale))
    }

    /// Name of `key` in the country locale.
    pub fn default_name(&self, key: &str) -> Option<&str> {
        self.name_in(key, &self.locale)
    }

    pub fn get(&self, key: &str) -> Option<&HolidayRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        d.year() == self.year && self.records.iter().any(|r| r.date() == d)
    }

    pub fn on(&self, d: NaiveDate) -> impl Iterator<Item = &HolidayRecord> {
        self.records.iter().filter(move |r| r.date() == d)
    }

    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HolidayRecord> {
        self.records.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(HolidayRecord::key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by date; ties keep declaration order.
    pub fn sorted_by_date(&self) -> Vec<&HolidayRecord> {
        let mut sorted: Vec<&HolidayRecord> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.date());
        sorted
    }

    /// Records dated within `[start, end]`, in declaration order.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&HolidayRecord> {
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        self.records
            .iter()
            .filter(|r| r.date() >= start && r.date() <= end)
            .collect()
    }

    pub fn filter(&self, holiday_type: HolidayType) -> HolidayFilter<'_, impl Fn(&HolidayRecord) -> bool> {
        filter(&self.records, holiday_type)
    }

    pub fn into_records(self) -> Vec<HolidayRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a CountryYearResult {
    type Item = &'a HolidayRecord;
    type IntoIter = std::slice::Iter<'a, HolidayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
