//! Stored collection
//!
//! A `Vec<T>` stored as one JSON array under one store key. Every mutation
//! rewrites the whole array. Store failures are logged and leave the
//! in-memory list ahead of (or behind) the store until the next good write.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, Entity, IdGenerator, RecordId};
use crate::store::KeyValueStore;

/// Fresh-id attempts before giving up on a colliding generator
const MAX_ID_ATTEMPTS: usize = 8;

pub(crate) struct StoredCollection<T> {
    key: &'static str,
    store: Arc<dyn KeyValueStore>,
    items: Vec<T>,
    loaded: bool,
    diverged: bool,
}

impl<T> StoredCollection<T>
where
    T: Entity<Id = RecordId> + Serialize + DeserializeOwned,
{
    pub fn new(key: &'static str, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            key,
            store,
            items: Vec::new(),
            loaded: false,
            diverged: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_diverged(&self) -> bool {
        self.diverged
    }

    /// Replace the list with the stored array; a missing key means empty
    pub async fn load(&mut self) {
        if let Err(e) = self.hydrate().await {
            log::error!("{}", e);
        }
    }

    async fn hydrate(&mut self) -> DomainResult<()> {
        let stored = match self.store.get_item(self.key).await {
            Ok(stored) => stored,
            Err(e) => {
                self.diverged = true;
                return Err(DomainError::Internal(format!("Failed to read '{}': {}", self.key, e)));
            }
        };
        let items = match stored {
            None => Vec::new(),
            Some(json) => match serde_json::from_str::<Vec<T>>(&json) {
                Ok(items) => items,
                Err(e) => {
                    self.diverged = true;
                    return Err(DomainError::Internal(format!(
                        "Failed to decode '{}': {}",
                        self.key, e
                    )));
                }
            },
        };
        log::debug!("Loaded {} entries from '{}'", items.len(), self.key);
        self.items = items;
        self.loaded = true;
        self.diverged = false;
        Ok(())
    }

    /// Hydrate once before the first mutation. Until that succeeds no
    /// mutation runs, so a write never clobbers entries that were only in
    /// the store.
    async fn ensure_loaded(&mut self) -> DomainResult<()> {
        if self.loaded {
            return Ok(());
        }
        self.hydrate().await.map_err(|e| {
            log::error!("{}; refusing to overwrite '{}'", e, self.key);
            e
        })
    }

    /// Write the whole list back to the store
    async fn persist(&mut self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to encode '{}': {}", self.key, e);
                self.diverged = true;
                return;
            }
        };

        match self.store.set_item(self.key, &json).await {
            Ok(()) => self.diverged = false,
            Err(e) => {
                log::error!("Failed to write '{}': {}", self.key, e);
                self.diverged = true;
            }
        }
    }

    /// Id from `ids` that no current entry uses
    pub fn fresh_id(&self, ids: &dyn IdGenerator) -> DomainResult<RecordId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = ids.next_id();
            if !id.is_empty() && !self.items.iter().any(|item| item.id() == &id) {
                return Ok(id);
            }
            log::warn!("Discarding colliding id '{}' for '{}'", id, self.key);
        }
        Err(DomainError::Conflict(format!(
            "No unused identifier after {} attempts",
            MAX_ID_ATTEMPTS
        )))
    }

    /// Append built by `make` from a fresh id, then persist
    pub async fn push_with<F>(&mut self, ids: &dyn IdGenerator, make: F) -> DomainResult<T>
    where
        F: FnOnce(RecordId) -> T + Send,
    {
        self.ensure_loaded().await?;
        let entity = make(self.fresh_id(ids)?);
        self.items.push(entity.clone());
        self.persist().await;
        Ok(entity)
    }

    /// Drop the entry with `id` and persist; `false` when nothing matched
    pub async fn remove(&mut self, id: &RecordId) -> DomainResult<bool> {
        self.ensure_loaded().await?;
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist().await;
        Ok(true)
    }
}
