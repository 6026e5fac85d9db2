//! Persisted audio enhancement settings
//!
//! Reactive store over the key-value collaborator: readers subscribe to a
//! watch channel carrying the current [`EffectSettings`]; each setter
//! performs an atomic persisted upsert and then republishes. Strength values
//! are clamped at the write boundary, so a persisted value can never be
//! observed out of range; reads additionally normalize rows written by a
//! different schema version.
//!
//! Read faults degrade to the default configuration rather than propagating.
//! Write faults surface as errors for the storage collaborator to handle.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};
use verse_core::types::{EffectSettings, NO_PRESET};
use verse_core::{KeyValueStore, Result};

// Setting key constants
/// Whether audio enhancement is enabled
pub const KEY_ENABLED: &str = "effects.enabled";

/// Selected equalizer preset index
pub const KEY_PRESET_INDEX: &str = "effects.preset_index";

/// Equalizer band levels, delimited
pub const KEY_BAND_LEVELS: &str = "effects.band_levels";

/// Bass boost strength (0-1000)
pub const KEY_BASS_BOOST_STRENGTH: &str = "effects.bass_boost_strength";

/// Platform reverb preset id
pub const KEY_REVERB_PRESET: &str = "effects.reverb_preset";

/// Virtualizer strength (0-1000)
pub const KEY_VIRTUALIZER_STRENGTH: &str = "effects.virtualizer_strength";

/// Delimiter for the persisted band-level sequence
const BAND_DELIMITER: char = ',';

/// Reactive, clamp-invariant store for [`EffectSettings`]
pub struct EffectSettingsStore {
    store: Arc<dyn KeyValueStore>,
    tx: watch::Sender<EffectSettings>,
}

impl EffectSettingsStore {
    /// Create the store, loading the persisted configuration
    ///
    /// A read fault yields the default configuration (logged at `warn`);
    /// creation itself never fails.
    pub async fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let initial = match Self::load(store.as_ref()).await {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "failed to load effect settings, using defaults");
                EffectSettings::default()
            }
        };

        let (tx, _) = watch::channel(initial);
        Self { store, tx }
    }

    async fn load(store: &dyn KeyValueStore) -> Result<EffectSettings> {
        let mut settings = EffectSettings::default();

        for (key, value) in store.entries().await? {
            match key.as_str() {
                KEY_ENABLED => settings.enabled = value == "1",
                KEY_PRESET_INDEX => settings.preset_index = value.parse().unwrap_or(NO_PRESET),
                KEY_BAND_LEVELS => settings.band_levels = parse_band_levels(&value),
                KEY_BASS_BOOST_STRENGTH => settings.bass_boost_strength = parse_strength(&value),
                KEY_REVERB_PRESET => settings.reverb_preset = value.parse().unwrap_or(0),
                KEY_VIRTUALIZER_STRENGTH => {
                    settings.virtualizer_strength = parse_strength(&value);
                }
                _ => {}
            }
        }

        Ok(settings.normalized())
    }

    /// Subscribe to the settings change stream
    ///
    /// The receiver immediately holds the current value and is notified
    /// after every successful write.
    pub fn subscribe(&self) -> watch::Receiver<EffectSettings> {
        self.tx.subscribe()
    }

    /// Current settings snapshot
    pub fn current(&self) -> EffectSettings {
        self.tx.borrow().clone()
    }

    /// Enable or disable enhancement
    pub async fn set_enabled(&self, enabled: bool) -> Result<()> {
        debug!(enabled, "persisting effect enabled flag");
        self.store
            .set(KEY_ENABLED, if enabled { "1" } else { "0" })
            .await?;
        self.tx.send_modify(|s| s.enabled = enabled);
        Ok(())
    }

    /// Select an equalizer preset (`NO_PRESET` for none)
    pub async fn set_preset_index(&self, index: i32) -> Result<()> {
        self.store.set(KEY_PRESET_INDEX, &index.to_string()).await?;
        self.tx.send_modify(|s| s.preset_index = index);
        Ok(())
    }

    /// Replace the equalizer band levels
    pub async fn set_band_levels(&self, levels: &[i32]) -> Result<()> {
        let encoded = levels
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&BAND_DELIMITER.to_string());

        self.store.set(KEY_BAND_LEVELS, &encoded).await?;
        self.tx.send_modify(|s| s.band_levels = levels.to_vec());
        Ok(())
    }

    /// Set bass boost strength, clamped to 0..=1000 before persisting
    pub async fn set_bass_boost_strength(&self, strength: i32) -> Result<()> {
        let strength = EffectSettings::clamp_strength(strength);
        self.store
            .set(KEY_BASS_BOOST_STRENGTH, &strength.to_string())
            .await?;
        self.tx.send_modify(|s| s.bass_boost_strength = strength);
        Ok(())
    }

    /// Set the platform reverb preset
    pub async fn set_reverb_preset(&self, preset: i32) -> Result<()> {
        self.store
            .set(KEY_REVERB_PRESET, &preset.to_string())
            .await?;
        self.tx.send_modify(|s| s.reverb_preset = preset);
        Ok(())
    }

    /// Set virtualizer strength, clamped to 0..=1000 before persisting
    ///
    /// Zero is a valid, explicit value: it persists as "0", distinct from a
    /// key that was never written.
    pub async fn set_virtualizer_strength(&self, strength: i32) -> Result<()> {
        let strength = EffectSettings::clamp_strength(strength);
        self.store
            .set(KEY_VIRTUALIZER_STRENGTH, &strength.to_string())
            .await?;
        self.tx.send_modify(|s| s.virtualizer_strength = strength);
        Ok(())
    }
}

/// Parse a persisted strength, clamping into range
fn parse_strength(value: &str) -> u16 {
    value
        .trim()
        .parse::<i32>()
        .map(EffectSettings::clamp_strength)
        .unwrap_or(0)
}

/// Parse a delimited band-level sequence, silently dropping unparsable
/// entries
fn parse_band_levels(value: &str) -> Vec<i32> {
    value
        .split(BAND_DELIMITER)
        .filter_map(|token| token.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_levels_drop_unparsable_entries() {
        assert_eq!(parse_band_levels("3,-2,0"), vec![3, -2, 0]);
        assert_eq!(parse_band_levels("3,x,7"), vec![3, 7]);
        assert_eq!(parse_band_levels(""), Vec::<i32>::new());
        assert_eq!(parse_band_levels("not numbers"), Vec::<i32>::new());
    }

    #[test]
    fn strength_parsing_clamps_and_defaults() {
        assert_eq!(parse_strength("500"), 500);
        assert_eq!(parse_strength("5000"), 1000);
        assert_eq!(parse_strength("-3"), 0);
        assert_eq!(parse_strength("garbage"), 0);
    }
}
