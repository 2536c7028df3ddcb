use chrono::{
    NaiveDate,
    Weekday
};

use crate::holiday::holidayerror::HolidayError;

use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Debug)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn date_in(&self, year: i32, _timezone: &str) -> Result<NaiveDate, HolidayError> {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
            .ok_or_else(|| HolidayError::invalid_date(year, self.month, 7 * self.n as u32))
    }
}
