//! User use-case service.
//!
//! # Responsibility
//! - Provide register/get/list/rename/deactivate/remove entry points.
//! - Enforce validation and email uniqueness before persistence.
//!
//! # Invariants
//! - Every write goes through `User::validate()`.
//! - Edits read a copy, change it, then write it back with `update`.
//! - Service layer stays storage-agnostic through `UserStore`.

use crate::model::user::{User, UserId, UserValidationError};
use crate::repo::memory::{RepoError, Repository};
use crate::repo::user_repo::UserStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// Service error for user use-cases.
#[derive(Debug)]
pub enum UserServiceError {
    /// Input failed model validation.
    Invalid(UserValidationError),
    /// Another user already owns this email.
    EmailTaken(String),
    /// Target user does not exist.
    UserNotFound(UserId),
    /// Repository failure not covered above.
    Repo(RepoError),
}

impl Display for UserServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::EmailTaken(email) => write!(f, "email already registered: {email}"),
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for UserServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UserValidationError> for UserServiceError {
    fn from(value: UserValidationError) -> Self {
        Self::Invalid(value)
    }
}

impl From<RepoError> for UserServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for user management.
pub struct UserService<R: UserStore> {
    repo: R,
}

impl<R: UserStore> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &R {
        &self.repo
    }

    /// Registers a new active user.
    ///
    /// # Errors
    /// - `Invalid` when name or email fails validation.
    /// - `EmailTaken` when the email is already used, ignoring case.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> UserServiceResult<User> {
        let user = User::new(name, email);
        if let Err(err) = user.validate() {
            warn!("event=user_register module=service status=rejected reason=validation");
            return Err(err.into());
        }
        if self.repo.find_by_email(&user.email).is_some() {
            warn!("event=user_register module=service status=rejected reason=email_taken");
            return Err(UserServiceError::EmailTaken(user.email));
        }

        let created = self.repo.create(user)?;
        info!(
            "event=user_register module=service status=ok user_id={}",
            created.id
        );
        Ok(created)
    }

    pub fn get(&self, id: UserId) -> UserServiceResult<User> {
        self.repo.find_by_id(&id).map_err(|err| not_found_as(err, id))
    }

    /// Lists all users sorted by name, then id.
    pub fn list(&self) -> Vec<User> {
        let mut users = self.repo.find_all();
        users.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        users
    }

    /// Replaces a user's display name.
    pub fn rename(&mut self, id: UserId, name: impl Into<String>) -> UserServiceResult<User> {
        let mut user = self.get(id)?;
        user.name = name.into().trim().to_string();
        let updated = self.write_back(user)?;
        info!("event=user_rename module=service status=ok user_id={id}");
        Ok(updated)
    }

    /// Marks a user inactive. Already-inactive users are returned unchanged.
    pub fn deactivate(&mut self, id: UserId) -> UserServiceResult<User> {
        let mut user = self.get(id)?;
        if !user.active {
            return Ok(user);
        }
        user.deactivate();
        let updated = self.write_back(user)?;
        info!("event=user_deactivate module=service status=ok user_id={id}");
        Ok(updated)
    }

    pub fn remove(&mut self, id: UserId) -> UserServiceResult<()> {
        self.repo.delete(&id).map_err(|err| not_found_as(err, id))?;
        info!("event=user_remove module=service status=ok user_id={id}");
        Ok(())
    }

    /// Validates an edited copy, then replaces the stored user with it.
    fn write_back(&mut self, user: User) -> UserServiceResult<User> {
        let id = user.id;
        if let Err(err) = user.validate() {
            warn!(
                "event=user_update module=service status=rejected reason=validation user_id={id}"
            );
            return Err(err.into());
        }
        self.repo.update(user).map_err(|err| not_found_as(err, id))
    }
}

fn not_found_as(err: RepoError, id: UserId) -> UserServiceError {
    match err {
        RepoError::NotFound(_) => UserServiceError::UserNotFound(id),
        other => UserServiceError::Repo(other),
    }
}
