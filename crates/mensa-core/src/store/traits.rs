//! Store Layer - Core Trait
//!
//! Defines the abstract interface of the device store.
//! Implementations can use SQLite, in-memory maps, etc.

use async_trait::async_trait;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the underlying storage backend
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Store not initialized")]
    NotInitialized,
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Platform key-value storage
///
/// All operations are async to support various backends.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}
