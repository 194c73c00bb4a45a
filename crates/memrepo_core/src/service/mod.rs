//! Core use-case services.
//!
//! # Responsibility
//! - Validate input and orchestrate repository calls into use-case APIs.
//! - Emit metadata-only log events for mutating use cases.
//!
//! # Invariants
//! - Services never bypass model validation before writing.
//! - Log lines carry ids and outcomes, never user-supplied payloads.

pub mod flag_service;
pub mod user_service;
