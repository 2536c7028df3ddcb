use std::fmt;

use serde::{
    Serialize,
    Deserialize
};

/// Category of a holiday record.
///
/// `National` covers official public holidays; `Bank` days close banks and
/// most businesses without being statutory rest days everywhere.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum HolidayType {
    #[default]
    National,
    Observance,
    Season,
    Bank,
    Other
}

impl HolidayType {
    /// Off-work days that other substitutions must not land on.
    pub fn is_day_off(&self) -> bool {
        matches!(self, HolidayType::National | HolidayType::Bank)
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HolidayType::National => "national",
            HolidayType::Observance => "observance",
            HolidayType::Season => "season",
            HolidayType::Bank => "bank",
            HolidayType::Other => "other"
        };
        f.write_str(s)
    }
}
