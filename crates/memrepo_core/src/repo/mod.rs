//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define the generic CRUD contract over any `Entity`.
//! - Provide domain wrappers that add finders by composition.
//!
//! # Invariants
//! - At most one entity per identifier is stored.
//! - Missing identifiers are always reported as `RepoError::NotFound`.
//! - Repositories never log; reporting is left to callers.

pub mod flag_repo;
pub mod memory;
pub mod user_repo;
