use crate::holiday::holidayrecord::HolidayRecord;
use crate::holiday::holidaytype::HolidayType;

/// Lazy view over records that satisfy a predicate.
///
/// The view borrows the records, so it can be iterated any number of times;
/// each pass yields the accepted records in their original order.
pub struct HolidayFilter<'a, P>
    where P: Fn(&HolidayRecord) -> bool {
    records: &'a [HolidayRecord],
    predicate: P
}

impl<'a, P> HolidayFilter<'a, P>
    where P: Fn(&HolidayRecord) -> bool {
    pub fn new(records: &'a [HolidayRecord], predicate: P) -> HolidayFilter<'a, P> {
        HolidayFilter { records, predicate }
    }

    pub fn iter(&self) -> HolidayFilterIter<'a, '_, P> {
        HolidayFilterIter {
            inner: self.records.iter(),
            predicate: &self.predicate
        }
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<'a, 'f, P> IntoIterator for &'f HolidayFilter<'a, P>
    where P: Fn(&HolidayRecord) -> bool {
    type Item = &'a HolidayRecord;
    type IntoIter = HolidayFilterIter<'a, 'f, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct HolidayFilterIter<'a, 'f, P> {
    inner: std::slice::Iter<'a, HolidayRecord>,
    predicate: &'f P
}

impl<'a, 'f, P> Iterator for HolidayFilterIter<'a, 'f, P>
    where P: Fn(&HolidayRecord) -> bool {
    type Item = &'a HolidayRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = self.predicate;
        self.inner.find(|record| predicate(*record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Records of exactly `holiday_type`.
pub fn filter(records: &[HolidayRecord], holiday_type: HolidayType) -> HolidayFilter<'_, impl Fn(&HolidayRecord) -> bool> {
    HolidayFilter::new(records, move |record: &HolidayRecord| record.holiday_type() == holiday_type)
}

pub fn official(records: &[HolidayRecord]) -> HolidayFilter<'_, impl Fn(&HolidayRecord) -> bool> {
    filter(records, HolidayType::National)
}

pub fn observance(records: &[HolidayRecord]) -> HolidayFilter<'_, impl Fn(&HolidayRecord) -> bool> {
    filter(records, HolidayType::Observance)
}

pub fn seasonal(records: &[HolidayRecord]) -> HolidayFilter<'_, impl Fn(&HolidayRecord) -> bool> {
    filter(records, HolidayType::Season)
}

pub fn bank(records: &[HolidayRecord]) -> HolidayFilter<'_, impl Fn(&HolidayRecord) -> bool> {
    filter(records, HolidayType::Bank)
}

pub fn other(records: &[HolidayRecord]) -> HolidayFilter<'_, impl Fn(&HolidayRecord) -> bool> {
    filter(records, HolidayType::Other)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{
        Datelike,
        NaiveDate
    };

    use super::*;

    fn record(key: &str, day: u32, holiday_type: HolidayType) -> HolidayRecord {
        HolidayRecord::new(
            key.to_owned(),
            NaiveDate::from_ymd_opt(2015, 10, day).unwrap(),
            holiday_type,
            BTreeMap::new()
        )
    }

    fn records() -> Vec<HolidayRecord> {
        vec![
            record("a", 1, HolidayType::National),
            record("b", 2, HolidayType::Observance),
            record("c", 3, HolidayType::National),
            record("d", 4, HolidayType::Season)
        ]
    }

    #[test]
    fn keeps_registry_order() {
        let records = records();
        let keys: Vec<&str> = official(&records).iter().map(|r| r.key()).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn restartable() {
        let records = records();
        let view = observance(&records);
        assert_eq!(view.count(), 1);
        assert_eq!(view.count(), 1);
        let mut passes = 0;
        for _ in &view {
            passes += 1;
        }
        for _ in &view {
            passes += 1;
        }
        assert_eq!(passes, 2);
    }

    #[test]
    fn empty_categories() {
        let records = records();
        assert!(bank(&records).is_empty());
        assert!(other(&records).is_empty());
        assert_eq!(seasonal(&records).count(), 1);
    }

    #[test]
    fn custom_predicate() {
        let records = records();
        let late = HolidayFilter::new(&records, |r: &HolidayRecord| r.date().day() > 2);
        assert_eq!(late.count(), 2);
    }
}
