//! Per-item persisted state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Media item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaItemId(String);

impl MediaItemId {
    /// Create a new media item ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional per-item playback state
///
/// An absent field means "unset", never zero: a bookmark at 0 ms is a real
/// bookmark at the start of the item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaItemState {
    /// Resume position, if the user bookmarked one
    pub bookmark_ms: Option<u64>,

    /// Preferred playback speed for this item, if configured
    pub default_speed: Option<f64>,
}

impl MediaItemState {
    /// Whether no per-item state has been recorded
    pub fn is_empty(&self) -> bool {
        self.bookmark_ms.is_none() && self.default_speed.is_none()
    }
}
