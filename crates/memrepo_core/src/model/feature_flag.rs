//! Feature flag domain model.

use crate::model::entity::Entity;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failures for feature flag keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValidationError {
    EmptyKey,
    InvalidKey(String),
}

impl Display for FlagValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "feature flag key cannot be empty"),
            Self::InvalidKey(value) => write!(
                f,
                "invalid feature flag key `{value}`; expected [a-z0-9_.-]"
            ),
        }
    }
}

impl Error for FlagValidationError {}

/// Named on/off switch keyed by `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlag {
    pub key: String,
    pub enabled: bool,
    pub description: Option<String>,
}

impl FeatureFlag {
    pub fn new(key: impl Into<String>, enabled: bool) -> Self {
        Self {
            key: key.into().trim().to_string(),
            enabled,
            description: None,
        }
    }

    pub fn validate(&self) -> Result<(), FlagValidationError> {
        validate_flag_key(&self.key)
    }
}

impl Entity for FeatureFlag {
    type Id = String;

    fn id(&self) -> &String {
        &self.key
    }
}

/// Checks that a key is non-empty and uses only `[a-z0-9_.-]`.
pub fn validate_flag_key(key: &str) -> Result<(), FlagValidationError> {
    if key.is_empty() {
        return Err(FlagValidationError::EmptyKey);
    }
    let valid = key
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-'));
    if !valid {
        return Err(FlagValidationError::InvalidKey(key.to_string()));
    }
    Ok(())
}
