use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("key '{0}' registered more than once")]
    DuplicateNameError(String),

    #[error("invalid rule '{key}': {reason}")]
    InvalidRuleError {
        key: String,
        reason: String
    }
}

impl ManagerError {
    pub fn invalid_rule(key: &str, reason: impl Into<String>) -> ManagerError {
        ManagerError::InvalidRuleError {
            key: key.to_owned(),
            reason: reason.into()
        }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
    where T: for<'a> Deserialize<'a> {
    serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
}
