//! Verse Artwork - Palette caching
//!
//! Color palettes extracted from album artwork are expensive to compute and
//! small to keep, so the process owns one bounded cache of them. The cache
//! is a fixed-capacity LRU: inserting beyond capacity evicts the
//! least-recently-used entry.
//!
//! Palette extraction itself happens elsewhere (it needs image decoding);
//! this crate only holds the results.
//!
//! # Example
//!
//! ```rust
//! use verse_artwork::{Color, Palette, PaletteCache};
//!
//! let mut cache = PaletteCache::new(100);
//! cache.insert("album-7", Palette::solid(Color::new(120, 40, 200)));
//!
//! assert!(cache.get("album-7").is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod types;

pub use cache::PaletteCache;
pub use types::{Color, Palette};
