//! Feature flag use-case service.
//!
//! # Responsibility
//! - Register flags and flip them on/off by key.
//! - Answer "is this enabled?" without ever failing.
//!
//! # Invariants
//! - Unknown keys read as disabled.
//! - State changes on unknown keys fail with `FlagNotFound`.

use crate::model::feature_flag::{validate_flag_key, FeatureFlag, FlagValidationError};
use crate::repo::flag_repo::FeatureFlagRepository;
use crate::repo::memory::{RepoError, Repository};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FlagServiceResult<T> = Result<T, FlagServiceError>;

#[derive(Debug)]
pub enum FlagServiceError {
    Invalid(FlagValidationError),
    DuplicateFlag(String),
    FlagNotFound(String),
}

impl Display for FlagServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::DuplicateFlag(key) => write!(f, "feature flag already registered: {key}"),
            Self::FlagNotFound(key) => write!(f, "feature flag not found: {key}"),
        }
    }
}

impl Error for FlagServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FlagValidationError> for FlagServiceError {
    fn from(value: FlagValidationError) -> Self {
        Self::Invalid(value)
    }
}

impl From<RepoError> for FlagServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateKey(key) => Self::DuplicateFlag(key),
            RepoError::NotFound(key) => Self::FlagNotFound(key),
        }
    }
}

/// Toggle service over an in-memory flag store.
#[derive(Debug, Default)]
pub struct FeatureFlagService {
    repo: FeatureFlagRepository,
}

impl FeatureFlagService {
    pub fn new(repo: FeatureFlagRepository) -> Self {
        Self { repo }
    }

    /// Registers one flag with an initial state.
    pub fn register(
        &mut self,
        key: &str,
        enabled: bool,
        description: Option<&str>,
    ) -> FlagServiceResult<FeatureFlag> {
        let mut flag = FeatureFlag::new(key, enabled);
        flag.description = description.map(str::to_string);
        flag.validate()?;

        let created = self.repo.create(flag)?;
        info!(
            "event=flag_register module=service status=ok key={} enabled={}",
            created.key, created.enabled
        );
        Ok(created)
    }

    /// Returns the flag state; unknown or malformed keys read as `false`.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.repo
            .find_by_key(key.trim())
            .map(|flag| flag.enabled)
            .unwrap_or(false)
    }

    pub fn enable(&mut self, key: &str) -> FlagServiceResult<bool> {
        self.set(key, |_| true)
    }

    pub fn disable(&mut self, key: &str) -> FlagServiceResult<bool> {
        self.set(key, |_| false)
    }

    /// Flips the flag and returns its new state.
    pub fn toggle(&mut self, key: &str) -> FlagServiceResult<bool> {
        self.set(key, |current| !current)
    }

    /// Sorted keys of every enabled flag.
    pub fn enabled_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .repo
            .find_enabled()
            .into_iter()
            .map(|flag| flag.key)
            .collect();
        keys.sort();
        keys
    }

    fn set(&mut self, key: &str, next: impl FnOnce(bool) -> bool) -> FlagServiceResult<bool> {
        let key = key.trim();
        validate_flag_key(key)?;

        let mut flag = self.repo.find_by_key(key)?;
        let previous = flag.enabled;
        flag.enabled = next(previous);
        if flag.enabled != previous {
            flag = self.repo.update(flag)?;
            info!(
                "event=flag_set module=service status=ok key={} enabled={}",
                flag.key, flag.enabled
            );
        }
        Ok(flag.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::{FeatureFlagService, FlagServiceError};

    #[test]
    fn toggle_flips_state_and_reports_it() {
        let mut flags = FeatureFlagService::default();
        flags.register("dark_mode", false, None).unwrap();

        assert!(flags.toggle("dark_mode").unwrap());
        assert!(flags.is_enabled("dark_mode"));
        assert!(!flags.toggle("dark_mode").unwrap());
        assert!(!flags.is_enabled("dark_mode"));
    }

    #[test]
    fn enable_and_disable_set_explicit_state() {
        let mut flags = FeatureFlagService::default();
        flags.register("audit.trail", true, None).unwrap();

        assert!(!flags.disable("audit.trail").unwrap());
        assert!(!flags.is_enabled("audit.trail"));
        assert!(!flags.disable("audit.trail").unwrap());
        assert!(flags.enable(" audit.trail ").unwrap());
        assert!(flags.is_enabled("audit.trail"));
        assert!(matches!(
            flags.disable("missing"),
            Err(FlagServiceError::FlagNotFound(_))
        ));
    }

    #[test]
    fn unknown_flag_reads_disabled_but_cannot_be_set() {
        let mut flags = FeatureFlagService::default();
        assert!(!flags.is_enabled("missing"));
        assert!(matches!(
            flags.enable("missing"),
            Err(FlagServiceError::FlagNotFound(key)) if key == "missing"
        ));
    }

    #[test]
    fn register_rejects_duplicates_and_invalid_keys() {
        let mut flags = FeatureFlagService::default();
        flags
            .register("beta.search", true, Some("new search"))
            .unwrap();
        assert!(matches!(
            flags.register("beta.search", false, None),
            Err(FlagServiceError::DuplicateFlag(_))
        ));
        assert!(matches!(
            flags.register("Beta Search", false, None),
            Err(FlagServiceError::Invalid(_))
        ));
        assert!(flags.is_enabled("beta.search"));
    }

    #[test]
    fn enabled_keys_are_sorted() {
        let mut flags = FeatureFlagService::default();
        flags.register("zeta", true, None).unwrap();
        flags.register("alpha", true, None).unwrap();
        flags.register("mid", false, None).unwrap();

        assert_eq!(flags.enabled_keys(), vec!["alpha", "zeta"]);
    }
}
