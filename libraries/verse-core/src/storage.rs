//! Key-value storage trait backing persisted preference stores

use crate::error::Result;
use async_trait::async_trait;

/// Durable key-value mapping
///
/// This trait abstracts the persistence mechanism so preference stores can be
/// backed by `SQLite` in production and by an in-memory map in tests. Values
/// are stored as strings; each store owns the encoding of its keys.
///
/// Writes for a given key are last-write-wins; implementations must apply
/// each `set` atomically.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value for a key, `None` if the key has never been written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set the value for a key, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;

    /// All stored key-value pairs
    async fn entries(&self) -> Result<Vec<(String, String)>>;
}
