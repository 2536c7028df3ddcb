use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;

use crate::manager::managererror::{ManagerError, parse_json_value};

use super::recurringholiday::RecurringHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::easterrelatedholiday::EasterRelatedHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::lastweekdayholiday::LastWeekdayHoliday;
use super::equinoxholiday::{
    EquinoxHoliday,
    EquinoxSeason
};

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(key: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.month, json_prop.day)
        .ok_or_else(|| ManagerError::invalid_rule(key, format!("no such date {}-{}", json_prop.month, json_prop.day)))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    #[serde(default)]
    shift_days: i32
}

fn easter_related_holiday_from_json(key: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    let holiday = EasterRelatedHoliday::new(json_prop.shift_days)
        .ok_or_else(|| ManagerError::invalid_rule(key, format!("shift of {} days leaves the Easter year", json_prop.shift_days)))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
}

fn nth_weekday_from_json(key: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)
        .ok_or_else(|| ManagerError::invalid_rule(key, "month must be 1-12 and n 1-5"))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday,
}

fn last_weekday_from_json(key: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = LastWeekdayHoliday::new(json_prop.month, json_prop.weekday)
        .ok_or_else(|| ManagerError::invalid_rule(key, "month must be 1-12"))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct EquinoxHolidayJsonProp {
    season: EquinoxSeason
}

fn equinox_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EquinoxHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EquinoxHoliday::new(json_prop.season)))
}

#[derive(Deserialize)]
enum DateRuleType {
    FixedDate,
    EasterRelated,
    NthWeekday,
    LastWeekday,
    Equinox
}

#[derive(Deserialize)]
struct DateRuleTypedObject {
    date_rule: DateRuleType
}

/// Builds the date strategy described by the `date_rule` tag of a rule entry.
pub fn get_recurring_holiday_from_json(key: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let typed_obj: DateRuleTypedObject = parse_json_value(json.clone())?;
    match typed_obj.date_rule {
        DateRuleType::FixedDate     => fixed_date_holiday_from_json(key, json),
        DateRuleType::EasterRelated => easter_related_holiday_from_json(key, json),
        DateRuleType::NthWeekday    => nth_weekday_from_json(key, json),
        DateRuleType::LastWeekday   => last_weekday_from_json(key, json),
        DateRuleType::Equinox       => equinox_from_json(json)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_each_strategy() {
        let cases = [
            (json!({ "date_rule": "FixedDate", "month": 7, "day": 14 }), NaiveDate::from_ymd_opt(2020, 7, 14)),
            (json!({ "date_rule": "EasterRelated", "shift_days": 1 }), NaiveDate::from_ymd_opt(2020, 4, 13)),
            (json!({ "date_rule": "NthWeekday", "month": 9, "n": 1, "weekday": "Mon" }), NaiveDate::from_ymd_opt(2020, 9, 7)),
            (json!({ "date_rule": "LastWeekday", "month": 5, "weekday": "Mon" }), NaiveDate::from_ymd_opt(2020, 5, 25)),
            (json!({ "date_rule": "Equinox", "season": "Vernal" }), NaiveDate::from_ymd_opt(2020, 3, 20))
        ];
        for (json, expected) in cases {
            let rule = get_recurring_holiday_from_json("test", json).unwrap();
            assert_eq!(rule.date_in(2020, "UTC").ok(), expected);
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        let err = get_recurring_holiday_from_json("bad", json!({ "date_rule": "FixedDate", "month": 2, "day": 30 }));
        assert!(matches!(err, Err(ManagerError::InvalidRuleError { .. })));
        let err = get_recurring_holiday_from_json("bad", json!({ "date_rule": "Lunar" }));
        assert!(matches!(err, Err(ManagerError::JsonParseError(_))));
    }
}
