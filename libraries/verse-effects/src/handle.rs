//! Uniform capability handle over the negotiated effect tier

use crate::platform::{SpatializerDevice, VirtualizerDevice};
use std::fmt;
use tracing::warn;
use verse_core::types::{EffectSettings, MAX_EFFECT_STRENGTH};

/// Which capability tier negotiation selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityTier {
    /// No effect facility could be bound
    Unavailable,

    /// Session-scoped virtualizer effect
    Legacy,

    /// System spatializer facility
    Modern,
}

/// The one handle a playback session drives its enhancement through
///
/// Uniform surface regardless of tier: enable state, strength (where
/// supported), and release. Mutating calls are total; device faults are
/// logged and swallowed so the caller never has to branch on tier.
///
/// The handle is exclusively owned by the active playback session and must
/// be released exactly once when the session ends: [`EffectHandle::release`]
/// is the only path that frees the underlying effect-engine slot. It is
/// idempotent, and a released handle behaves like `Unavailable`.
pub enum EffectHandle {
    /// Neither tier could be bound; every mutation is a no-op
    Unavailable,

    /// Modern spatializer tier (`None` once released)
    Modern(Option<Box<dyn SpatializerDevice>>),

    /// Legacy virtualizer tier (`None` once released)
    Legacy(Option<Box<dyn VirtualizerDevice>>),
}

impl EffectHandle {
    /// The tier negotiation selected
    pub fn tier(&self) -> CapabilityTier {
        match self {
            EffectHandle::Unavailable => CapabilityTier::Unavailable,
            EffectHandle::Modern(_) => CapabilityTier::Modern,
            EffectHandle::Legacy(_) => CapabilityTier::Legacy,
        }
    }

    /// Whether the effect is currently enabled
    pub fn is_enabled(&self) -> bool {
        match self {
            EffectHandle::Unavailable => false,
            EffectHandle::Modern(device) => device.as_ref().is_some_and(|d| d.is_enabled()),
            EffectHandle::Legacy(device) => device.as_ref().is_some_and(|d| d.is_enabled()),
        }
    }

    /// Enable or disable the effect
    pub fn set_enabled(&mut self, enabled: bool) {
        let result = match self {
            EffectHandle::Unavailable => Ok(()),
            EffectHandle::Modern(device) => {
                device.as_mut().map_or(Ok(()), |d| d.set_enabled(enabled))
            }
            EffectHandle::Legacy(device) => {
                device.as_mut().map_or(Ok(()), |d| d.set_enabled(enabled))
            }
        };

        if let Err(err) = result {
            warn!(enabled, error = %err, "effect enable toggle failed");
        }
    }

    /// Whether this handle has a settable strength parameter
    ///
    /// Always false for the modern tier and `Unavailable`; for the legacy
    /// tier the platform decides.
    pub fn strength_supported(&self) -> bool {
        match self {
            EffectHandle::Legacy(device) => device.as_ref().is_some_and(|d| d.strength_supported()),
            _ => false,
        }
    }

    /// Current strength as rounded by the device, 0 when unsupported
    pub fn strength(&self) -> u16 {
        match self {
            EffectHandle::Legacy(device) => device
                .as_ref()
                .filter(|d| d.strength_supported())
                .map_or(0, |d| d.rounded_strength()),
            _ => 0,
        }
    }

    /// Apply a strength value, clamped to 0..=1000 before use
    ///
    /// A no-op on tiers without strength support.
    pub fn set_strength(&mut self, raw: i32) {
        let strength = raw.clamp(0, i32::from(MAX_EFFECT_STRENGTH)) as u16;

        if let EffectHandle::Legacy(Some(device)) = self {
            if !device.strength_supported() {
                return;
            }
            if let Err(err) = device.set_strength(strength) {
                warn!(strength, error = %err, "virtualizer strength update failed");
            }
        }
    }

    /// Apply persisted settings to this handle
    ///
    /// Called on settings load and on every user change.
    pub fn apply_settings(&mut self, settings: &EffectSettings) {
        self.set_enabled(settings.enabled);
        self.set_strength(i32::from(settings.virtualizer_strength));
    }

    /// Free the underlying platform resource
    ///
    /// Idempotent; only the first call reaches the device. Omitting release
    /// leaks an effect-engine slot, so session teardown must call this.
    pub fn release(&mut self) {
        match self {
            EffectHandle::Unavailable => {}
            EffectHandle::Modern(device) => {
                if let Some(mut d) = device.take() {
                    d.release();
                }
            }
            EffectHandle::Legacy(device) => {
                if let Some(mut d) = device.take() {
                    d.release();
                }
            }
        }
    }
}

impl fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectHandle")
            .field("tier", &self.tier())
            .field("enabled", &self.is_enabled())
            .field("strength_supported", &self.strength_supported())
            .finish()
    }
}
