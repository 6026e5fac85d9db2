//! Verse Player - Playback Feature Coordination
//!
//! Position-driven feature coordination for a playback session.
//!
//! This crate provides:
//! - Crossfade eligibility policy (`CrossfadePolicy`): a pure evaluator that
//!   decides whether a crossfade between tracks may engage
//! - Per-session feature wiring (`FeatureSession`): lyric sync, the
//!   negotiated effect handle, and the policy behind one owner
//!
//! The policy composes three independent axes - availability, duration
//! validation, and suppression - and returns all three in one
//! [`CrossfadeDecision`]. It never raises; reasons are descriptive strings
//! for display, not for branching.
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::{PlayerSnapshot, PlayerState, VolumeProbe};
//! use verse_playback::CrossfadePolicy;
//!
//! let snapshot = PlayerSnapshot {
//!     state: PlayerState::Ready,
//!     queue_len: 5,
//!     has_next: true,
//!     volume: VolumeProbe::Read(0.9),
//! };
//!
//! let policy = CrossfadePolicy::new();
//! let decision = policy.evaluate(Some(&snapshot), 3000, false, false);
//! assert!(decision.can_engage());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod crossfade;
mod session;

pub use crossfade::{
    CrossfadeDecision, CrossfadePolicy, DurationValidation, MAX_CROSSFADE_DURATION_MS,
    SHORT_DURATION_WARNING_MS,
};
pub use session::FeatureSession;
