//! `SQLite` implementation of the durable key-value collaborator

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use verse_core::{KeyValueStore, Result, VerseError};

/// Key-value rows in the `key_value` table
///
/// One row per key; writes are single-row upserts, so the most recent write
/// for a key always wins.
#[derive(Debug, Clone)]
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    /// Create a store over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM key_value WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| VerseError::storage(e.to_string()))?;

        Ok(row.map(|r| r.get::<String, _>("value")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO key_value (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(chrono::Utc::now().timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| VerseError::storage(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM key_value WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| VerseError::storage(e.to_string()))?;

        Ok(())
    }

    async fn entries(&self) -> Result<Vec<(String, String)>> {
        let rows = sqlx::query("SELECT key, value FROM key_value ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| VerseError::storage(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|row| (row.get::<String, _>("key"), row.get::<String, _>("value")))
            .collect())
    }
}
