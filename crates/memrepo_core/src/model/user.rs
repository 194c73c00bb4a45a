//! User domain model.
//!
//! # Responsibility
//! - Define the canonical user record stored by user repositories.
//! - Validate user fields before they reach persistence.
//!
//! # Invariants
//! - `id` is stable and never reused for another user.
//! - A stored user always passes `User::validate()`.

use crate::model::entity::Entity;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a user.
pub type UserId = Uuid;

/// Maximum display name length in characters, after trimming.
pub const MAX_USER_NAME_CHARS: usize = 64;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Validation failures for `User` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    NameTooLong { chars: usize, max: usize },
    InvalidEmail(String),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "user name cannot be empty"),
            Self::NameTooLong { chars, max } => {
                write!(f, "user name has {chars} characters; maximum is {max}")
            }
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
        }
    }
}

impl Error for UserValidationError {}

/// Canonical user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name, stored trimmed.
    pub name: String,
    pub email: String,
    /// Inactive users stay stored but are skipped by `find_active`.
    pub active: bool,
}

impl User {
    /// Creates an active user with a generated stable ID.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, email)
    }

    /// Creates an active user with a caller-provided stable ID.
    ///
    /// Does not validate; call [`User::validate`] before persisting.
    pub fn with_id(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            active: true,
        }
    }

    /// Checks name and email constraints.
    ///
    /// # Errors
    /// - `EmptyName` when the trimmed name is empty.
    /// - `NameTooLong` when the name exceeds [`MAX_USER_NAME_CHARS`].
    /// - `InvalidEmail` when the email is not of the form `local@domain.tld`.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_name(&self.name)?;
        validate_email(&self.email)
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

/// Validates a user display name.
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_USER_NAME_CHARS {
        return Err(UserValidationError::NameTooLong {
            chars,
            max: MAX_USER_NAME_CHARS,
        });
    }
    Ok(())
}

/// Validates an email address shape. No deliverability checks.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(UserValidationError::InvalidEmail(email.to_string()))
    }
}
