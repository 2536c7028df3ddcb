use thiserror::Error;

/// Errors surfaced by the date engine and the holiday registry.
///
/// None of them are transient: a `build_year` call either returns the
/// complete result for the requested year or one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HolidayError {
    #[error("year {year} is outside the supported range [{min}, {max}]")]
    InvalidYear {
        year: i32,
        min: i32,
        max: i32
    },

    #[error("no holiday rule set registered for country '{0}'")]
    UnknownCountry(String),

    #[error("holiday '{key}' emitted more than once for {country} in {year}")]
    DuplicateKey {
        country: String,
        year: i32,
        key: String
    },

    #[error("{year}-{month}-{day} is not a valid calendar date")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32
    },

    #[error("holiday configuration unavailable: {0}")]
    Configuration(String)
}

impl HolidayError {
    pub fn invalid_year(year: i32, min: i32, max: i32) -> HolidayError {
        HolidayError::InvalidYear { year, min, max }
    }

    pub fn invalid_date(year: i32, month: u32, day: u32) -> HolidayError {
        HolidayError::InvalidDate { year, month, day }
    }
}
