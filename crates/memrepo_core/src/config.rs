//! Core runtime configuration.
//!
//! # Responsibility
//! - Collect logging settings from the environment or a serialized source.
//! - Normalize values once so downstream init sees canonical input.
//!
//! # Invariants
//! - A validated config always carries a supported level.
//! - `log_dir`, when set, is absolute.

use crate::logging::{
    default_log_level, init_logging, normalize_level, normalize_log_dir, LoggingError,
};
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "MEMREPO_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "MEMREPO_LOG_DIR";

/// Settings consumed by core bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub log_level: String,
    /// File logging is skipped when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads `MEMREPO_LOG_LEVEL` and `MEMREPO_LOG_DIR` from the process env.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a validated config from any key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoggingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(level) = non_blank(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.log_dir = non_blank(ENV_LOG_DIR).map(PathBuf::from);
        config.validate()
    }

    /// Normalizes the level and checks the directory.
    pub fn validate(mut self) -> Result<Self, LoggingError> {
        self.log_level = normalize_level(&self.log_level)?.to_string();
        if let Some(dir) = &self.log_dir {
            self.log_dir = Some(normalize_log_dir(&dir.to_string_lossy())?);
        }
        Ok(self)
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when no directory is set.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        match &self.log_dir {
            Some(dir) => {
                init_logging(&self.log_level, &dir.to_string_lossy())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::logging::{default_log_level, LoggingError};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_env_uses_defaults() {
        let config = CoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
        assert_eq!(config.init_logging(), Ok(false));
    }

    #[test]
    fn env_values_are_normalized() {
        let config = CoreConfig::from_lookup(lookup_from(&[
            (ENV_LOG_LEVEL, " WARNING "),
            (ENV_LOG_DIR, "/var/log/memrepo"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/memrepo")));
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config =
            CoreConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "  "), (ENV_LOG_DIR, "")]))
                .unwrap();
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn rejects_relative_dir_and_unknown_level() {
        let relative = CoreConfig::from_lookup(lookup_from(&[(ENV_LOG_DIR, "logs")]));
        assert!(matches!(relative, Err(LoggingError::RelativeLogDir(_))));

        let level = CoreConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "loud")]));
        assert!(matches!(level, Err(LoggingError::UnsupportedLevel(_))));
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let config: CoreConfig = serde_json::from_str(r#"{"log_level":"error"}"#).unwrap();
        assert_eq!(config.log_level, "error");
        assert_eq!(config.log_dir, None);
    }
}
