use chrono::NaiveDate;

use crate::holiday::holidayerror::HolidayError;
use crate::time::utility::days_of_month;

use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Debug)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// Returns `None` unless `month`/`day` exist at least in a leap year.
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        if !(1..=12).contains(&month) || day == 0 || day > days_of_month(2000, month) {
            None
        } else {
            Some(FixedDateHoliday { month, day })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn date_in(&self, year: i32, _timezone: &str) -> Result<NaiveDate, HolidayError> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or_else(|| HolidayError::invalid_date(year, self.month, self.day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_impossible_dates() {
        assert!(FixedDateHoliday::new(13, 1).is_none());
        assert!(FixedDateHoliday::new(4, 31).is_none());
        assert!(FixedDateHoliday::new(6, 0).is_none());
        assert!(FixedDateHoliday::new(2, 29).is_some());
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        let leap_day = FixedDateHoliday::new(2, 29).unwrap();
        assert_eq!(
            leap_day.date_in(2024, "UTC"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(
            leap_day.date_in(2023, "UTC"),
            Err(HolidayError::invalid_date(2023, 2, 29))
        );
    }

    #[test]
    fn christmas() {
        let christmas = FixedDateHoliday::new(12, 25).unwrap();
        for year in [1583, 1999, 2024, 4099] {
            assert_eq!(
                christmas.date_in(year, "Europe/Rome").unwrap(),
                NaiveDate::from_ymd_opt(year, 12, 25).unwrap()
            );
        }
    }
}
