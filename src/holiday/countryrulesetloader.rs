use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::{IManager, ManagerBuilder};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::manager::namedobject::NamedJsonObject;
use crate::translation::nameresolver::DEFAULT_LOCALE;

use super::countryruleset::CountryRuleSet;
use super::holidayrule::{HolidayRule, holiday_rule_from_json};

fn default_locale() -> String {
    DEFAULT_LOCALE.to_owned()
}

#[derive(Deserialize)]
struct CountryRuleSetJsonProp {
    timezone: String,
    #[serde(default = "default_locale")]
    default_locale: String,
    #[serde(default)]
    avoid_collisions: bool,
    rules: Vec<serde_json::Value>
}

/// Loads country rule tables, registering each under its name and code.
pub struct CountryRuleSetLoader;

impl IManager<CountryRuleSet> for CountryRuleSetLoader {
    fn insert_obj_from_json(&self,
                            builder: &mut ManagerBuilder<CountryRuleSet>,
                            json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_obj: NamedJsonObject = parse_json_value(json_value.clone())?;
        let json_prop: CountryRuleSetJsonProp = parse_json_value(json_value)?;

        let rules = json_prop.rules
            .into_iter()
            .map(holiday_rule_from_json)
            .collect::<Result<Vec<HolidayRule>, ManagerError>>()?;

        let rule_set = CountryRuleSet::new(
            named_obj.name().to_owned(),
            named_obj.code().cloned(),
            json_prop.timezone,
            json_prop.default_locale,
            json_prop.avoid_collisions,
            rules
        );
        for key in rule_set.overlapping_keys() {
            tracing::warn!(country = %named_obj.name(), key, "rules with overlapping effective years");
        }
        tracing::info!(country = %named_obj.name(), rules = rule_set.rules().len(), "loaded holiday rule set");

        let rule_set = Arc::new(rule_set);
        builder.insert(named_obj.name().to_owned(), Arc::clone(&rule_set))?;
        if let Some(code) = named_obj.code() {
            builder.insert(code.to_owned(), rule_set)?;
        }
        Ok(())
    }
}
