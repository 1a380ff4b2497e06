//! SQLite-backed device store
//!
//! One table of key/value rows. Access to the connection is serialized
//! through an async mutex.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::traits::{KeyValueStore, StoreError, StoreResult};

/// Key-value store persisted in a local SQLite file
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl SqliteStore {
    /// Open (or create) the store file and run migrations
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Backend(format!("Failed to open store: {}", e)))?;
        Self::from_connection(conn)
    }

    /// Store living only as long as this value
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Backend(format!("Failed to open store: {}", e)))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        run_migrations(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(Some(conn))),
        })
    }

    /// Drop the connection; later calls fail with `NotInitialized`
    pub async fn close(&self) {
        self.conn.lock().await.take();
    }
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(names) = stmt.query_map([], |row| row.get::<_, String>(1)) else {
        return false;
    };
    let found = names.flatten().any(|name| name == column);
    found
}

fn run_migrations(conn: &Connection) -> StoreResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| StoreError::Backend(e.to_string()))?;

    if !column_exists(conn, "kv_store", "updated_at") {
        conn.execute("ALTER TABLE kv_store ADD COLUMN updated_at INTEGER", [])
            .map_err(|e| StoreError::Backend(format!("Failed to add updated_at: {}", e)))?;
    }

    Ok(())
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(StoreError::NotInitialized)?;

        conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(StoreError::NotInitialized)?;

        let now = chrono::Local::now().timestamp_millis();
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }
}
