//! Repository Layer - Core Traits
//!
//! Read surface shared by every stored collection. Mutations are specific
//! to each repository.

use async_trait::async_trait;
use crate::domain::Entity;

/// A list of entities owned in memory and mirrored to the device store
#[async_trait]
pub trait CollectionRepository<T: Entity>: Send + Sync {
    /// Replace the in-memory list with what the store holds
    async fn load(&mut self);

    /// Current in-memory list, in insertion order
    fn list(&self) -> &[T];

    /// Whether the last store read or write failed
    fn is_diverged(&self) -> bool;

    /// Find entity by ID
    fn find_by_id(&self, id: &T::Id) -> Option<&T> {
        self.list().iter().find(|entity| entity.id() == id)
    }
}
