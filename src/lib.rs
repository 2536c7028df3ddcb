pub mod configuration;

pub mod filter {
    pub mod holidayfilter;
}

pub mod holiday {
    pub mod holidayerror;
    pub mod holidaytype;
    pub mod holidayrecord;
    pub mod holidayrule;
    pub mod countryyearresult;
    pub mod countryruleset;
    pub mod countryrulesetloader;
    pub mod holidayregistry;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod effectiveyears;
        pub mod substitution;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
        pub mod equinoxholiday;
        pub mod recurringholidaymanager;
    }
}

pub mod translation {
    pub mod translationtable;
    pub mod nameresolver;
}

pub use filter::holidayfilter::filter;
pub use holiday::countryyearresult::CountryYearResult;
pub use holiday::holidayerror::HolidayError;
pub use holiday::holidayrecord::HolidayRecord;
pub use holiday::holidayregistry::{HolidayRegistry, build_year, builtin_registry};
pub use holiday::holidaytype::HolidayType;
pub use time::recurringholiday::recurringholiday::compute_date;
pub use time::recurringholiday::substitution::{SubstitutionPolicy, apply_substitution};
pub use translation::nameresolver::{DEFAULT_LOCALE, resolve_name, resolve_name_or};
