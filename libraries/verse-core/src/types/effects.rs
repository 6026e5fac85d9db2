//! Audio enhancement settings
//!
//! `EffectSettings` is the persisted configuration applied to whichever
//! effect capability the platform negotiated. Strength values are clamped to
//! `0..=MAX_EFFECT_STRENGTH` at every write boundary; `normalized` exists so
//! data persisted by an older schema can never be observed out of range.

use serde::{Deserialize, Serialize};

/// Maximum effect strength (per-mille, matching platform effect APIs)
pub const MAX_EFFECT_STRENGTH: u16 = 1000;

/// Preset index meaning "no preset selected"
pub const NO_PRESET: i32 = -1;

/// Audio session identifier an effect is bound to
///
/// Issued by the playback engine; one session per playback lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioSessionId(i32);

impl AudioSessionId {
    /// Wrap a raw platform session id
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw platform session id
    pub fn raw(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for AudioSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted audio enhancement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectSettings {
    /// Whether enhancement is enabled at all
    pub enabled: bool,

    /// Selected equalizer preset (`NO_PRESET` when none)
    pub preset_index: i32,

    /// Per-band equalizer levels in millibels
    pub band_levels: Vec<i32>,

    /// Bass boost strength (0..=1000)
    pub bass_boost_strength: u16,

    /// Platform reverb preset id
    pub reverb_preset: i32,

    /// Virtualizer strength (0..=1000)
    pub virtualizer_strength: u16,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            preset_index: NO_PRESET,
            band_levels: Vec::new(),
            bass_boost_strength: 0,
            reverb_preset: 0,
            virtualizer_strength: 0,
        }
    }
}

impl EffectSettings {
    /// Clamp a raw strength value into the valid range
    pub fn clamp_strength(raw: i32) -> u16 {
        raw.clamp(0, i32::from(MAX_EFFECT_STRENGTH)) as u16
    }

    /// Return a copy with every strength field forced into range
    ///
    /// Used when reading persisted data; the write path clamps as well, so
    /// this only matters for rows written by a different schema version.
    pub fn normalized(mut self) -> Self {
        self.bass_boost_strength = self.bass_boost_strength.min(MAX_EFFECT_STRENGTH);
        self.virtualizer_strength = self.virtualizer_strength.min(MAX_EFFECT_STRENGTH);
        self
    }
}
