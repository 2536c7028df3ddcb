use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::holiday::holidayerror::HolidayError;

use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Debug)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { month, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn date_in(&self, year: i32, _timezone: &str) -> Result<NaiveDate, HolidayError> {
        let first_of_next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, self.month + 1, 1)
        }.ok_or_else(|| HolidayError::invalid_date(year, self.month, 1))?;

        let current_weekday = first_of_next_month.weekday();
        let days_back = (current_weekday.num_days_from_monday() as i32
                         - self.weekday.num_days_from_monday() as i32 + 7) % 7;

        // same weekday as the 1st: go back a full week
        let days_back = if days_back == 0 { 7 } else { days_back } as u64;

        first_of_next_month
            .checked_sub_days(Days::new(days_back))
            .ok_or_else(|| HolidayError::invalid_date(year, self.month, 1))
    }
}
