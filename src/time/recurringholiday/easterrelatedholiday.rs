use chrono::{
    Days,
    NaiveDate
};

use crate::holiday::holidayerror::HolidayError;

use super::recurringholiday::RecurringHoliday;

pub const MIN_EASTER_YEAR: i32 = 1583;
pub const MAX_EASTER_YEAR: i32 = 4099;

/// Number of days Easter Sunday falls after March 21 in the Gregorian
/// calendar (1 = March 22, 35 = April 25).
pub fn easter_days(year: i32) -> Result<i32, HolidayError> {
    if !(MIN_EASTER_YEAR..=MAX_EASTER_YEAR).contains(&year) {
        return Err(HolidayError::invalid_year(year, MIN_EASTER_YEAR, MAX_EASTER_YEAR));
    }

    let g = year % 19;
    let c = year / 100;
    let c_div_4 = c / 4;
    let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let h_div_28 = h / 28;
    let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;

    // i - j is the offset from March 28
    Ok(i - j + 7)
}

pub fn easter_sunday(year: i32) -> Result<NaiveDate, HolidayError> {
    let days = easter_days(year)?;
    NaiveDate::from_ymd_opt(year, 3, 21)
        .and_then(|d| d.checked_add_days(Days::new(days as u64)))
        .ok_or_else(|| HolidayError::invalid_date(year, 3, 21))
}

#[derive(Clone, Debug)]
pub struct EasterRelatedHoliday {
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i32) -> Option<EasterRelatedHoliday> {
        // keep the holiday inside the Easter year
        if !(-80..=240).contains(&shift_days) {
            None
        } else {
            Some(EasterRelatedHoliday { shift_days })
        }
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn date_in(&self, year: i32, _timezone: &str) -> Result<NaiveDate, HolidayError> {
        let easter = easter_sunday(year)?;
        let shifted = if self.shift_days >= 0 {
            easter.checked_add_days(Days::new(self.shift_days as u64))
        } else {
            easter.checked_sub_days(Days::new(self.shift_days.unsigned_abs() as u64))
        };
        shifted.ok_or_else(|| HolidayError::invalid_date(year, 3, 21))
    }
}
