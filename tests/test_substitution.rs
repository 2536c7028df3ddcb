use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

use holidayrules::{SubstitutionPolicy, apply_substitution};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const POLICIES: [SubstitutionPolicy; 5] = [
    SubstitutionPolicy::None,
    SubstitutionPolicy::NextMondayIfWeekend,
    SubstitutionPolicy::NextWorkingDayIfSunday,
    SubstitutionPolicy::NearestWeekday,
    SubstitutionPolicy::PreviousDayIfSunday
];

#[test]
fn weekend_dates() {
    let saturday = ymd(2021, 12, 25);
    let sunday = ymd(2022, 12, 25);

    assert_eq!(apply_substitution(saturday, SubstitutionPolicy::None), saturday);
    assert_eq!(apply_substitution(saturday, SubstitutionPolicy::NextMondayIfWeekend), ymd(2021, 12, 27));
    assert_eq!(apply_substitution(sunday, SubstitutionPolicy::NextMondayIfWeekend), ymd(2022, 12, 26));
    assert_eq!(apply_substitution(saturday, SubstitutionPolicy::NextWorkingDayIfSunday), saturday);
    assert_eq!(apply_substitution(sunday, SubstitutionPolicy::NextWorkingDayIfSunday), ymd(2022, 12, 26));
    assert_eq!(apply_substitution(saturday, SubstitutionPolicy::NearestWeekday), ymd(2021, 12, 24));
    assert_eq!(apply_substitution(sunday, SubstitutionPolicy::NearestWeekday), ymd(2022, 12, 26));
    assert_eq!(apply_substitution(sunday, SubstitutionPolicy::PreviousDayIfSunday), ymd(2022, 12, 24));
}

#[test]
fn crosses_year_boundary() {
    // 2022-01-01 is a Saturday
    assert_eq!(apply_substitution(ymd(2022, 1, 1), SubstitutionPolicy::NearestWeekday), ymd(2021, 12, 31));
}

proptest! {
    /// A substituted date is left alone by a second pass.
    #[test]
    fn substitution_is_idempotent(offset in 0u64..200_000, policy in 0usize..POLICIES.len()) {
        let date = ymd(1700, 1, 1).checked_add_days(Days::new(offset)).unwrap();
        let policy = POLICIES[policy];
        let once = apply_substitution(date, policy);
        prop_assert_eq!(apply_substitution(once, policy), once);
    }

    /// Weekday-shifting policies never leave the date on a Sunday.
    #[test]
    fn never_lands_on_sunday(offset in 0u64..200_000) {
        let date = ymd(1700, 1, 1).checked_add_days(Days::new(offset)).unwrap();
        for policy in &POLICIES[1..] {
            prop_assert_ne!(apply_substitution(date, *policy).weekday(), Weekday::Sun);
        }
    }
}
