//! Crossfade eligibility policy
//!
//! Decides whether a crossfade between tracks may engage. Three axes are
//! computed independently and all three are returned:
//!
//! - **Availability**: structural preconditions on the player and queue,
//!   first failing condition wins
//! - **Duration validation**: bounds on the requested fade duration
//! - **Suppression**: overrides that disable engagement even when the
//!   structure allows it (sleep timer, buffering, ended)
//!
//! Callers must require `available && validation != Invalid && !suppressed`
//! before engaging; a `Warning` may still be surfaced while engaging.

use serde::{Deserialize, Serialize};
use verse_core::types::{PlayerSnapshot, VolumeProbe};

/// Longest crossfade a user may request
pub const MAX_CROSSFADE_DURATION_MS: i64 = 12_000;

/// Durations below this produce an audible-artifact warning
pub const SHORT_DURATION_WARNING_MS: i64 = 500;

/// Outcome of validating a requested crossfade duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationValidation {
    /// Duration is acceptable
    Valid,

    /// Duration is usable but likely to sound bad
    Warning(String),

    /// Duration must be rejected
    Invalid(String),
}

impl DurationValidation {
    /// Whether this outcome rejects the duration
    pub fn is_invalid(&self) -> bool {
        matches!(self, DurationValidation::Invalid(_))
    }
}

/// Result of one policy evaluation
///
/// Purely derived from the inputs; recomputed on each evaluation and never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossfadeDecision {
    /// Whether the player/queue structure permits a crossfade
    pub available: bool,

    /// Why crossfade is unavailable, for display
    pub reason: Option<String>,

    /// Validation of the requested duration, independent of availability
    pub validation: DurationValidation,

    /// Whether a competing timed effect or player condition overrides
    /// engagement
    pub suppressed: bool,
}

impl CrossfadeDecision {
    /// Whether a crossfade may actually engage
    pub fn can_engage(&self) -> bool {
        self.available && !self.validation.is_invalid() && !self.suppressed
    }
}

/// Stateless, side-effect-free crossfade eligibility evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossfadePolicy;

impl CrossfadePolicy {
    /// Create a policy evaluator
    pub fn new() -> Self {
        Self
    }

    /// Evaluate crossfade eligibility
    ///
    /// `player` is `None` when no player is bound. The decision always comes
    /// back; this never raises.
    pub fn evaluate(
        &self,
        player: Option<&PlayerSnapshot>,
        requested_duration_ms: i64,
        sleep_timer_active: bool,
        sleep_timer_fade_active: bool,
    ) -> CrossfadeDecision {
        let reason = Self::availability(player);

        CrossfadeDecision {
            available: reason.is_none(),
            reason,
            validation: Self::validate_duration(requested_duration_ms),
            suppressed: Self::suppressed(player, sleep_timer_active, sleep_timer_fade_active),
        }
    }

    /// First failing availability condition, `None` when available
    fn availability(player: Option<&PlayerSnapshot>) -> Option<String> {
        let Some(snapshot) = player else {
            return Some("player not available".to_string());
        };

        if !snapshot.state.is_initialized() {
            return Some("player not initialized".to_string());
        }
        if snapshot.queue_len < 2 {
            return Some("insufficient media items".to_string());
        }
        if !snapshot.has_next {
            return Some("no next media item available".to_string());
        }

        match &snapshot.volume {
            VolumeProbe::Read(volume) if (0.0..=1.0).contains(volume) => None,
            VolumeProbe::Read(volume) => Some(format!("player volume out of range: {volume}")),
            VolumeProbe::Unreadable => Some("player volume not readable".to_string()),
            VolumeProbe::Fault(description) => Some(description.clone()),
        }
    }

    /// Validate a requested crossfade duration
    pub fn validate_duration(duration_ms: i64) -> DurationValidation {
        if duration_ms < 0 {
            DurationValidation::Invalid("duration cannot be negative".to_string())
        } else if duration_ms > MAX_CROSSFADE_DURATION_MS {
            DurationValidation::Invalid("duration cannot exceed 12 seconds".to_string())
        } else if duration_ms > 0 && duration_ms < SHORT_DURATION_WARNING_MS {
            DurationValidation::Warning(
                "very short duration may cause audio artifacts".to_string(),
            )
        } else {
            DurationValidation::Valid
        }
    }

    /// Whether engagement is overridden regardless of availability
    ///
    /// The sleep-timer fade takes precedence over everything, including the
    /// plain sleep-timer flag.
    fn suppressed(
        player: Option<&PlayerSnapshot>,
        sleep_timer_active: bool,
        sleep_timer_fade_active: bool,
    ) -> bool {
        if sleep_timer_fade_active || sleep_timer_active {
            return true;
        }

        matches!(
            player.map(|p| p.state),
            Some(verse_core::types::PlayerState::Buffering)
                | Some(verse_core::types::PlayerState::Ended)
        )
    }
}
