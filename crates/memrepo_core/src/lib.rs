//! Core domain logic for memrepo.
//! Generic in-memory repositories plus the services that consume them.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entity::Entity;
pub use model::feature_flag::{FeatureFlag, FlagValidationError};
pub use model::user::{User, UserId, UserValidationError};
pub use repo::flag_repo::FeatureFlagRepository;
pub use repo::memory::{InMemoryRepository, RepoError, RepoResult, Repository};
pub use repo::user_repo::{UserRepository, UserStore};
pub use service::flag_service::{FeatureFlagService, FlagServiceError};
pub use service::user_service::{UserService, UserServiceError};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
