use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ShiftDirection {
    Forward = 1,
    Backward = -1
}

/// Observed-day policy of a holiday rule.
///
/// A Sunday-only trigger is not interchangeable with a weekend trigger.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum SubstitutionPolicy {
    #[default]
    None,
    /// Saturday or Sunday moves to the following Monday.
    NextMondayIfWeekend,
    /// Sunday moves to the next day that is neither Saturday nor Sunday.
    NextWorkingDayIfSunday,
    /// Saturday moves back to Friday, Sunday forward to Monday.
    NearestWeekday,
    /// Sunday moves back to Saturday.
    PreviousDayIfSunday
}

impl SubstitutionPolicy {
    fn triggers(&self) -> &'static [(Weekday, ShiftDirection)] {
        match self {
            SubstitutionPolicy::None => &[],
            SubstitutionPolicy::NextMondayIfWeekend => &[
                (Weekday::Sat, ShiftDirection::Forward),
                (Weekday::Sun, ShiftDirection::Forward)
            ],
            SubstitutionPolicy::NextWorkingDayIfSunday => &[
                (Weekday::Sun, ShiftDirection::Forward)
            ],
            SubstitutionPolicy::NearestWeekday => &[
                (Weekday::Sat, ShiftDirection::Backward),
                (Weekday::Sun, ShiftDirection::Forward)
            ],
            SubstitutionPolicy::PreviousDayIfSunday => &[
                (Weekday::Sun, ShiftDirection::Backward)
            ]
        }
    }

    /// Days a substituted holiday may not land on.
    pub fn rest_days(&self) -> &'static [Weekday] {
        match self {
            SubstitutionPolicy::PreviousDayIfSunday => &[Weekday::Sun],
            _ => &[Weekday::Sat, Weekday::Sun]
        }
    }

    pub fn is_rest_day(&self, weekday: Weekday) -> bool {
        self.rest_days().contains(&weekday)
    }
}

/// Per-weekday shift table for a policy, indexed by
/// `Weekday::num_days_from_monday()`.
#[derive(Clone, Copy, Debug)]
pub struct SubstitutionRule {
    policy: SubstitutionPolicy,
    rule: [Option<i64>; 7]
}

impl SubstitutionRule {
    pub fn new(policy: SubstitutionPolicy) -> SubstitutionRule {
        let mut rule: [Option<i64>; 7] = [None; 7];

        for &(weekday, direction) in policy.triggers() {
            let step = if direction == ShiftDirection::Forward {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut to_weekday = weekday;
            let mut shift_days = 0;
            while policy.is_rest_day(to_weekday) {
                to_weekday = step(&to_weekday);
                shift_days += direction as i64;
            }

            rule[weekday.num_days_from_monday() as usize] = Some(shift_days);
        }

        SubstitutionRule { policy, rule }
    }

    pub fn policy(&self) -> SubstitutionPolicy {
        self.policy
    }

    pub fn shift_for(&self, weekday: Weekday) -> Option<i64> {
        self.rule[weekday.num_days_from_monday() as usize]
    }

    pub fn is_unadjusted(&self) -> bool {
        self.rule.iter().all(Option::is_none)
    }

    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        match self.shift_for(d.weekday()) {
            Some(days) => shift_date(d, days),
            None => d
        }
    }
}

pub fn shift_date(d: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        d.checked_add_days(Days::new(days as u64))
    } else {
        d.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(d)
}

/// Observed date of a holiday falling on `date` under `policy`.
pub fn apply_substitution(date: NaiveDate, policy: SubstitutionPolicy) -> NaiveDate {
    SubstitutionRule::new(policy).adjust(date)
}
