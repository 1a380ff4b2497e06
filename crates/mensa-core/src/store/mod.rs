//! Device Key-Value Store
//!
//! String keys mapping to JSON text. No transactions, no schema versions.

mod traits;
mod memory;
mod sqlite;

pub use traits::{KeyValueStore, StoreError, StoreResult};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
