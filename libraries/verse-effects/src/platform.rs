//! Platform effect device traits
//!
//! Tier implementations are selected at build time (each platform build
//! provides its own `EffectPlatform`); only the availability check happens
//! at run time.

use crate::error::{EffectError, Result};
use verse_core::types::AudioSessionId;

/// Modern-tier spatialization facility
///
/// Global system facility, not bound to a session. Supports enable/disable
/// only; there is no strength parameter at this tier.
pub trait SpatializerDevice: Send {
    /// Whether the facility reports itself usable right now
    ///
    /// A present-but-unavailable spatializer must not be bound.
    fn is_available(&self) -> bool;

    /// Whether spatialization is currently enabled
    fn is_enabled(&self) -> bool;

    /// Enable or disable spatialization
    fn set_enabled(&mut self, enabled: bool) -> Result<()>;

    /// Free the underlying platform resource
    fn release(&mut self);
}

/// Legacy-tier virtualization effect, bound to one audio session
pub trait VirtualizerDevice: Send {
    /// Whether the platform reports a settable strength parameter
    fn strength_supported(&self) -> bool;

    /// Whether the effect is currently enabled
    fn is_enabled(&self) -> bool;

    /// Enable or disable the effect
    fn set_enabled(&mut self, enabled: bool) -> Result<()>;

    /// Apply a strength in 0..=1000; only called when strength is supported
    fn set_strength(&mut self, strength: u16) -> Result<()>;

    /// Strength as rounded by the device
    fn rounded_strength(&self) -> u16;

    /// Free the effect-engine slot held by this effect
    fn release(&mut self);
}

/// Provider of the platform's effect tiers
///
/// One implementation per platform build. Constructors must fail fast: a
/// probe that cannot succeed promptly returns an error rather than blocking.
pub trait EffectPlatform {
    /// The system spatializer, if this platform has one at all
    ///
    /// Returning `Some` does not imply usability; callers must still check
    /// [`SpatializerDevice::is_available`].
    fn spatializer(&self) -> Option<Box<dyn SpatializerDevice>>;

    /// Construct a virtualizer bound to the session, initially disabled
    fn create_virtualizer(&self, session: AudioSessionId) -> Result<Box<dyn VirtualizerDevice>>;
}

/// Platform with no effect facility
///
/// Used by headless builds and tests; negotiation against it always yields
/// `Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffectPlatform;

impl EffectPlatform for NoEffectPlatform {
    fn spatializer(&self) -> Option<Box<dyn SpatializerDevice>> {
        None
    }

    fn create_virtualizer(&self, _session: AudioSessionId) -> Result<Box<dyn VirtualizerDevice>> {
        Err(EffectError::FacilityAbsent)
    }
}
