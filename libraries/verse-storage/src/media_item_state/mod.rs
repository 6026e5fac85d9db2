//! Per-item playback state (bookmark position, preferred speed)
//!
//! One optional-field record per media item. An absent field means "unset",
//! never zero; clearing a field sets it back to NULL without touching the
//! other.

use crate::StorageError;
use sqlx::{Row, SqlitePool};
use verse_core::types::{MediaItemId, MediaItemState};

type Result<T> = std::result::Result<T, StorageError>;

/// Get per-item state
///
/// Returns an empty state if no record exists
pub async fn get(pool: &SqlitePool, item_id: &MediaItemId) -> Result<MediaItemState> {
    let row = sqlx::query(
        "SELECT bookmark_ms, default_speed FROM media_item_state WHERE item_id = ?",
    )
    .bind(item_id.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row
        .map(|r| MediaItemState {
            bookmark_ms: r.get::<Option<i64>, _>("bookmark_ms").map(|ms| ms as u64),
            default_speed: r.get::<Option<f64>, _>("default_speed"),
        })
        .unwrap_or_default())
}

/// Set the bookmark position for an item
pub async fn set_bookmark(pool: &SqlitePool, item_id: &MediaItemId, bookmark_ms: u64) -> Result<()> {
    sqlx::query(
        "INSERT INTO media_item_state (item_id, bookmark_ms, updated_at) VALUES (?, ?, ?)
         ON CONFLICT(item_id)
         DO UPDATE SET bookmark_ms = excluded.bookmark_ms, updated_at = excluded.updated_at",
    )
    .bind(item_id.as_str())
    .bind(bookmark_ms as i64)
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await?;

    Ok(())
}

/// Clear the bookmark for an item, leaving other fields untouched
pub async fn clear_bookmark(pool: &SqlitePool, item_id: &MediaItemId) -> Result<()> {
    sqlx::query("UPDATE media_item_state SET bookmark_ms = NULL, updated_at = ? WHERE item_id = ?")
        .bind(chrono::Utc::now().timestamp())
        .bind(item_id.as_str())
        .execute(pool)
        .await?;

    Ok(())
}

/// Set the preferred playback speed for an item
pub async fn set_default_speed(
    pool: &SqlitePool,
    item_id: &MediaItemId,
    speed: f64,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO media_item_state (item_id, default_speed, updated_at) VALUES (?, ?, ?)
         ON CONFLICT(item_id)
         DO UPDATE SET default_speed = excluded.default_speed, updated_at = excluded.updated_at",
    )
    .bind(item_id.as_str())
    .bind(speed)
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await?;

    Ok(())
}

/// Clear the preferred speed for an item, leaving other fields untouched
pub async fn clear_default_speed(pool: &SqlitePool, item_id: &MediaItemId) -> Result<()> {
    sqlx::query(
        "UPDATE media_item_state SET default_speed = NULL, updated_at = ? WHERE item_id = ?",
    )
    .bind(chrono::Utc::now().timestamp())
    .bind(item_id.as_str())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete the record for an item
pub async fn delete(pool: &SqlitePool, item_id: &MediaItemId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM media_item_state WHERE item_id = ?")
        .bind(item_id.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
