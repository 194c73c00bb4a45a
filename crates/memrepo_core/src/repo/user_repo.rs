//! User repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Expose generic CRUD for `User` plus user-specific finders.
//! - Reuse `InMemoryRepository` by holding it rather than re-implementing it.
//!
//! # Invariants
//! - Email lookups compare case-insensitively (Unicode-aware) after trimming.

use crate::model::user::{User, UserId};
use crate::repo::memory::{InMemoryRepository, RepoResult, Repository};

/// Storage contract required by `UserService`.
pub trait UserStore: Repository<User> {
    fn find_by_email(&self, email: &str) -> Option<User>;
    fn find_active(&self) -> Vec<User>;
}

/// In-memory user store with email and activity finders.
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    inner: InMemoryRepository<User>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Repository<User> for UserRepository {
    fn create(&mut self, user: User) -> RepoResult<User> {
        self.inner.create(user)
    }

    fn find_all(&self) -> Vec<User> {
        self.inner.find_all()
    }

    fn find_by_id(&self, id: &UserId) -> RepoResult<User> {
        self.inner.find_by_id(id)
    }

    fn update(&mut self, user: User) -> RepoResult<User> {
        self.inner.update(user)
    }

    fn delete(&mut self, id: &UserId) -> RepoResult<()> {
        self.inner.delete(id)
    }
}

impl UserStore for UserRepository {
    fn find_by_email(&self, email: &str) -> Option<User> {
        let needle = normalize_email(email);
        self.inner
            .iter()
            .find(|user| normalize_email(&user.email) == needle)
            .cloned()
    }

    fn find_active(&self) -> Vec<User> {
        self.inner.iter().filter(|user| user.active).cloned().collect()
    }
}

/// Canonical form used for email comparisons.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{normalize_email, UserRepository, UserStore};
    use crate::model::user::User;
    use crate::repo::memory::Repository;

    #[test]
    fn find_by_email_ignores_case_and_whitespace() {
        let mut repo = UserRepository::new();
        let ada = repo.create(User::new("Ada", "Ada@Example.com")).unwrap();

        let found = repo
            .find_by_email("  ada@example.COM ")
            .expect("email lookup should match");
        assert_eq!(found, ada);
        assert!(repo.find_by_email("grace@example.com").is_none());
    }

    #[test]
    fn find_by_email_folds_non_ascii_case() {
        let mut repo = UserRepository::new();
        let elise = repo.create(User::new("Élise", "Élise@example.fr")).unwrap();

        assert_eq!(repo.find_by_email("élise@EXAMPLE.fr"), Some(elise));
        assert_eq!(normalize_email(" Ärger@X.io "), "ärger@x.io");
    }

    #[test]
    fn find_active_skips_deactivated_users() {
        let mut repo = UserRepository::new();
        let ada = repo.create(User::new("Ada", "ada@example.com")).unwrap();
        let mut grace = repo.create(User::new("Grace", "grace@example.com")).unwrap();
        grace.deactivate();
        repo.update(grace).unwrap();

        let active = repo.find_active();
        assert_eq!(active, vec![ada]);
        assert_eq!(repo.len(), 2);
    }
}
