//! Verse Player Storage
//!
//! `SQLite` persistence layer for the feature-coordination core: durable
//! key-value preferences (backing the effect settings store) and per-item
//! playback state.
//!
//! # Architecture
//!
//! - **Key-value slice**: generic string key/value rows behind the
//!   [`verse_core::KeyValueStore`] trait, so preference stores can be tested
//!   against an in-memory implementation
//! - **Vertical slices**: each feature owns its own queries (`media_item_state`)
//! - **Write-boundary clamping**: invariant-carrying stores normalize values
//!   before they are persisted, never only on read
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use verse_storage::{create_pool, run_migrations, SqliteKeyValueStore};
//! use verse_storage::effect_settings::EffectSettingsStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://verse.db").await?;
//! run_migrations(&pool).await?;
//!
//! let kv = Arc::new(SqliteKeyValueStore::new(pool.clone()));
//! let settings = EffectSettingsStore::new(kv).await;
//! settings.set_virtualizer_strength(750).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod kv;

pub mod effect_settings;
pub mod media_item_state;

pub use error::StorageError;
pub use kv::SqliteKeyValueStore;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

type Result<T> = std::result::Result<T, StorageError>;

/// Run database migrations
///
/// Call once at startup before constructing any store.
///
/// # Errors
///
/// Returns an error if a migration statement fails to execute
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    // Embedded migrations for reliability across execution contexts
    const MIGRATIONS: &[&str] = &[
        include_str!("../migrations/20260110000001_create_key_value.sql"),
        include_str!("../migrations/20260110000002_create_media_item_state.sql"),
    ];

    for migration in MIGRATIONS {
        sqlx::query(migration)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }

    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://verse.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    Ok(pool)
}
