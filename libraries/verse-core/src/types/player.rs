//! Player state types consumed by the policy layer

use serde::{Deserialize, Serialize};

/// Coarse player lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Player exists but has not been prepared with media
    Idle,

    /// Player is buffering and cannot render audio yet
    Buffering,

    /// Player is prepared and able to play
    Ready,

    /// Playback reached the end of the queue
    Ended,
}

impl PlayerState {
    /// Whether the player has been prepared with media
    ///
    /// `Idle` is the only uninitialized state; `Ended` players remain
    /// initialized (they can be re-seeked).
    pub fn is_initialized(&self) -> bool {
        !matches!(self, PlayerState::Idle)
    }
}

/// Result of probing the player volume
///
/// Volume probing can fail on some platforms (the player may be mid-release,
/// or the audio stack may refuse the read). Faults are carried as data so
/// policy evaluation stays total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VolumeProbe {
    /// Volume read successfully (expected range 0.0..=1.0)
    Read(f32),

    /// The player exposed no readable volume
    Unreadable,

    /// The probe itself faulted
    Fault(String),
}

/// Point-in-time view of the player used for crossfade eligibility
///
/// Purely a value; taking a snapshot must never mutate player state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Player lifecycle state
    pub state: PlayerState,

    /// Number of items in the playback queue
    pub queue_len: usize,

    /// Whether a subsequent item is queued after the current one
    pub has_next: bool,

    /// Probed player volume
    pub volume: VolumeProbe,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_uninitialized() {
        assert!(!PlayerState::Idle.is_initialized());
        assert!(PlayerState::Buffering.is_initialized());
        assert!(PlayerState::Ready.is_initialized());
        assert!(PlayerState::Ended.is_initialized());
    }
}
