use chrono::{
    Datelike,
    NaiveDate
};

use crate::holiday::holidayerror::HolidayError;

/// A date-computation strategy for one holiday.
///
/// Implementations are pure: the same `(year, timezone)` always yields the
/// same date. The timezone is an opaque identifier handed through from the
/// country rule set; the civil date does not depend on it.
pub trait RecurringHoliday: Send + Sync {

    fn date_in(&self, year: i32, timezone: &str) -> Result<NaiveDate, HolidayError>;

    fn is_holiday(&self, d: &NaiveDate, timezone: &str) -> bool {
        self.date_in(d.year(), timezone).is_ok_and(|h| h == *d)
    }
}

/// Computes the civil date of `rule` for `year`.
pub fn compute_date(rule: &dyn RecurringHoliday, year: i32, timezone: &str) -> Result<NaiveDate, HolidayError> {
    let date = rule.date_in(year, timezone)?;
    tracing::trace!(year, timezone, %date, "computed holiday date");
    Ok(date)
}
