//! Fixed-capacity palette cache

use crate::types::Palette;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Bounded key-to-palette cache with eviction-on-insert
///
/// Owned by the process; not shared across threads. Capacity is fixed at
/// construction, and inserting a new key at capacity evicts the
/// least-recently-used entry.
#[derive(Debug)]
pub struct PaletteCache {
    cache: LruCache<String, Palette>,
}

impl PaletteCache {
    /// Create a cache holding up to `capacity` palettes
    ///
    /// A zero capacity is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Look up a palette, marking it most recently used
    pub fn get(&mut self, key: &str) -> Option<&Palette> {
        self.cache.get(key)
    }

    /// Insert a palette, evicting the least-recently-used entry at capacity
    pub fn insert(&mut self, key: impl Into<String>, palette: Palette) {
        self.cache.put(key.into(), palette);
    }

    /// Whether a palette is cached for the key, without touching recency
    pub fn contains(&self, key: &str) -> bool {
        self.cache.contains(key)
    }

    /// Number of cached palettes
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Maximum number of palettes the cache holds
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}
