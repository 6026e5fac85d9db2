//! Verse Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Verse Player.
//!
//! This crate provides the foundational building blocks shared by the
//! feature-coordination crates (lyrics synchronization, effect capability
//! negotiation, crossfade policy, persisted settings).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `PlayerSnapshot`, `EffectSettings`, `MediaItemState`, etc.
//! - **Collaborator Traits**: `PlaybackController`, `PlaybackStateSource`, `KeyValueStore`
//! - **Error Handling**: Unified `VerseError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::{PlayerSnapshot, PlayerState, VolumeProbe};
//!
//! let snapshot = PlayerSnapshot {
//!     state: PlayerState::Ready,
//!     queue_len: 12,
//!     has_next: true,
//!     volume: VolumeProbe::Read(0.8),
//! };
//! assert!(snapshot.state.is_initialized());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VerseError};
pub use storage::KeyValueStore;
pub use traits::{PlaybackController, PlaybackStateSource};
