//! Collaborator traits for the feature-coordination core
//!
//! The playback engine itself lives outside this workspace; these traits are
//! the boundary it is consumed through. Implementations are provided by the
//! hosting application.

use crate::error::Result;
use crate::types::PlayerSnapshot;

/// Side-effecting playback control
///
/// Used by features that need to move the playhead, e.g. tapping a lyric
/// line to jump to its timestamp.
pub trait PlaybackController {
    /// Seek to an absolute position in the current item
    fn seek_to(&mut self, position_ms: u64) -> Result<()>;
}

/// Read-only view of the player used for policy evaluation
///
/// A snapshot is taken per evaluation; the source never blocks. Volume reads
/// that fail must be reported through [`crate::types::VolumeProbe`] rather
/// than panicking.
pub trait PlaybackStateSource {
    /// Current player/queue state
    fn snapshot(&self) -> PlayerSnapshot;

    /// Current playback position in milliseconds
    fn position_ms(&self) -> u64;
}
