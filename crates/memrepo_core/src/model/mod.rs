//! Domain model for repository-managed entities.
//!
//! # Responsibility
//! - Define the identity contract every stored value must satisfy.
//! - Provide concrete domain records consumed by services.
//!
//! # Invariants
//! - Every entity exposes one stable identifier for its whole lifetime.
//! - Identifier equality is the only notion of "same entity".

pub mod entity;
pub mod feature_flag;
pub mod user;
