//! Verse Player - Lyric Synchronization
//!
//! Parses timestamped lyric text and tracks which line is current for an
//! arbitrary stream of playback positions.
//!
//! This crate provides:
//! - LRC-style parsing with degrade-gracefully semantics (`parser`)
//! - A position index that stays correct under seeks in either direction
//!   (`LyricSynchronizer`)
//! - Context windows around the current line for display
//! - Tap-to-seek via the [`verse_core::PlaybackController`] collaborator
//!
//! Parsing never fails: lines without a usable timestamp tag get a synthetic
//! timestamp offset from the previous line, so every non-blank input line is
//! kept.
//!
//! # Example
//!
//! ```rust
//! use verse_lyrics::{parser, LyricSynchronizer};
//!
//! let lines = parser::parse("[00:12.00]First line\n[00:15.50]Second line");
//!
//! let mut sync = LyricSynchronizer::new();
//! sync.attach(lines);
//!
//! assert_eq!(sync.update_position(13_000), Some(0));
//! assert_eq!(sync.update_position(16_000), Some(1));
//! // Same line again: no change published
//! assert_eq!(sync.update_position(16_500), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod parser;
mod sync;
mod types;

pub use sync::LyricSynchronizer;
pub use types::LyricLine;
