//! Generic repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide strict CRUD over a single keyed collection.
//! - Hand out owned copies so stored values change only through `update`.
//!
//! # Invariants
//! - `create` never overwrites; an existing identifier yields `DuplicateKey`.
//! - `update` replaces the whole value; there is no field-level merge.
//! - No internal locking. Mutating calls take `&mut self` and callers
//!   serialize access across threads.

use crate::model::entity::Entity;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::Hash;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository failure. Payload is the identifier rendered with `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    DuplicateKey(String),
    NotFound(String),
}

impl RepoError {
    pub fn duplicate_key(id: &impl Display) -> Self {
        Self::DuplicateKey(id.to_string())
    }

    pub fn not_found(id: &impl Display) -> Self {
        Self::NotFound(id.to_string())
    }

    /// Returns the identifier the failure refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::DuplicateKey(key) | Self::NotFound(key) => key,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "entity already exists: {key}"),
            Self::NotFound(key) => write!(f, "entity not found: {key}"),
        }
    }
}

impl Error for RepoError {}

/// CRUD contract over one entity type.
pub trait Repository<E: Entity> {
    /// Stores a new entity and returns it unchanged.
    fn create(&mut self, entity: E) -> RepoResult<E>;
    /// Returns copies of every stored entity in unspecified order.
    fn find_all(&self) -> Vec<E>;
    fn find_by_id(&self, id: &E::Id) -> RepoResult<E>;
    /// Replaces an existing entity and returns the stored value.
    fn update(&mut self, entity: E) -> RepoResult<E>;
    fn delete(&mut self, id: &E::Id) -> RepoResult<()>;
}

/// `HashMap`-backed repository, generic over the stored entity.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E: Entity> {
    entities: HashMap<E::Id, E>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.entities.contains_key(id)
    }

    /// Borrowed lookup, e.g. `&str` for `String` identifiers.
    pub fn get<Q>(&self, id: &Q) -> Option<&E>
    where
        E::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entities.get(id)
    }

    /// Borrows stored values for scanning finders.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.entities.values()
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn create(&mut self, entity: E) -> RepoResult<E> {
        let id = entity.id().clone();
        if self.entities.contains_key(&id) {
            return Err(RepoError::duplicate_key(&id));
        }
        self.entities.insert(id, entity.clone());
        Ok(entity)
    }

    fn find_all(&self) -> Vec<E> {
        self.entities.values().cloned().collect()
    }

    fn find_by_id(&self, id: &E::Id) -> RepoResult<E> {
        self.entities
            .get(id)
            .cloned()
            .ok_or_else(|| RepoError::not_found(id))
    }

    fn update(&mut self, entity: E) -> RepoResult<E> {
        match self.entities.get_mut(entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(RepoError::not_found(entity.id())),
        }
    }

    fn delete(&mut self, id: &E::Id) -> RepoResult<()> {
        self.entities
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found(id))
    }
}
