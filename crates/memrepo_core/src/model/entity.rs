//! Identity contract for repository-managed values.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A value that carries a unique, stable identifier.
///
/// Repositories key their storage on [`Entity::id`], so the returned value
/// must not change while the entity is stored.
pub trait Entity: Clone {
    /// Identifier type. `Display` is used when rendering repository errors.
    type Id: Clone + Eq + Hash + Display + Debug;

    fn id(&self) -> &Self::Id;
}
