//! Per-session feature wiring
//!
//! One logical session owner drives lyric sync, the negotiated effect
//! handle, and crossfade policy. Position updates and player-state reads
//! arrive on a single sequential stream; no internal locking is needed.

use crate::crossfade::{CrossfadeDecision, CrossfadePolicy};
use tracing::debug;
use verse_core::types::{AudioSessionId, EffectSettings, PlayerSnapshot};
use verse_effects::{negotiate, EffectHandle, EffectPlatform};
use verse_lyrics::{LyricLine, LyricSynchronizer};

/// Feature state owned by one playback session
///
/// Capability negotiation runs once when the session begins and the result
/// is fixed until [`FeatureSession::end`]; effect settings are re-applied to
/// the handle on load and on every user change.
pub struct FeatureSession {
    lyrics: LyricSynchronizer,
    effects: EffectHandle,
    policy: CrossfadePolicy,
}

impl FeatureSession {
    /// Begin a session: negotiate the effect capability for `session_id`
    pub fn begin(platform: &dyn EffectPlatform, session_id: AudioSessionId) -> Self {
        let effects = negotiate(platform, session_id);
        debug!(%session_id, tier = ?effects.tier(), "feature session started");

        Self {
            lyrics: LyricSynchronizer::new(),
            effects,
            policy: CrossfadePolicy::new(),
        }
    }

    /// Lyric synchronizer for this session
    pub fn lyrics(&self) -> &LyricSynchronizer {
        &self.lyrics
    }

    /// Mutable lyric synchronizer (attach/detach)
    pub fn lyrics_mut(&mut self) -> &mut LyricSynchronizer {
        &mut self.lyrics
    }

    /// Negotiated effect handle
    pub fn effects(&self) -> &EffectHandle {
        &self.effects
    }

    /// Attach a parsed lyric sequence
    pub fn attach_lyrics(&mut self, lines: Vec<LyricLine>) {
        self.lyrics.attach(lines);
    }

    /// Apply persisted effect settings to the negotiated handle
    pub fn apply_effect_settings(&mut self, settings: &EffectSettings) {
        self.effects.apply_settings(settings);
    }

    /// Feed a playback position update; returns a changed lyric index
    pub fn on_position_update(&mut self, position_ms: u64) -> Option<usize> {
        self.lyrics.update_position(position_ms)
    }

    /// Evaluate crossfade eligibility against the current player snapshot
    pub fn evaluate_crossfade(
        &self,
        player: Option<&PlayerSnapshot>,
        requested_duration_ms: i64,
        sleep_timer_active: bool,
        sleep_timer_fade_active: bool,
    ) -> CrossfadeDecision {
        self.policy.evaluate(
            player,
            requested_duration_ms,
            sleep_timer_active,
            sleep_timer_fade_active,
        )
    }

    /// End the session: detach lyrics and release the effect slot
    ///
    /// Safe to call more than once; release is idempotent.
    pub fn end(&mut self) {
        debug!("feature session ended");
        self.lyrics.detach();
        self.effects.release();
    }
}

impl Drop for FeatureSession {
    fn drop(&mut self) {
        // The effect-engine slot must not leak if the owner forgets end()
        self.effects.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verse_effects::{CapabilityTier, NoEffectPlatform};
    use verse_lyrics::parser;

    #[test]
    fn session_without_platform_effects_still_coordinates() {
        let mut session = FeatureSession::begin(&NoEffectPlatform, AudioSessionId::new(1));
        assert_eq!(session.effects().tier(), CapabilityTier::Unavailable);

        session.attach_lyrics(parser::parse("[00:01]a\n[00:05]b"));
        assert_eq!(session.on_position_update(2000), Some(0));
        assert_eq!(session.on_position_update(6000), Some(1));

        let decision = session.evaluate_crossfade(None, 3000, false, false);
        assert!(!decision.available);

        session.end();
        assert!(!session.lyrics().is_synchronized());
    }

    #[test]
    fn settings_application_is_safe_without_capability() {
        let mut session = FeatureSession::begin(&NoEffectPlatform, AudioSessionId::new(1));
        let settings = EffectSettings {
            enabled: true,
            virtualizer_strength: 900,
            ..Default::default()
        };

        session.apply_effect_settings(&settings);
        assert!(!session.effects().is_enabled());
    }

    #[test]
    fn end_twice_is_safe() {
        let mut session = FeatureSession::begin(&NoEffectPlatform, AudioSessionId::new(1));
        session.end();
        session.end();
    }
}
