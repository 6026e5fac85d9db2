//! Verse Player - Effect Capability Negotiation
//!
//! Platforms expose mutually exclusive audio-enhancement implementations
//! that vary by OS version and hardware. This crate probes the available
//! tiers once per playback session and presents exactly one uniform handle:
//!
//! 1. **Modern tier** - a system spatializer facility, bound only when it
//!    reports itself available. Enable/disable only; no strength parameter.
//! 2. **Legacy tier** - a session-scoped virtualizer effect, initially
//!    disabled. Strength (0..=1000) is settable only when the device reports
//!    strength support.
//! 3. **Unavailable** - neither tier could be bound. Every mutating call is
//!    a safe no-op.
//!
//! A failed probe is terminal for the session: negotiation resolves promptly
//! to [`EffectHandle::Unavailable`] and is not retried until the session is
//! recreated.
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::AudioSessionId;
//! use verse_effects::{negotiate, CapabilityTier, NoEffectPlatform};
//!
//! let mut handle = negotiate(&NoEffectPlatform, AudioSessionId::new(42));
//! assert_eq!(handle.tier(), CapabilityTier::Unavailable);
//!
//! // Mutating an unavailable handle never faults
//! handle.set_enabled(true);
//! handle.set_strength(500);
//! assert!(!handle.is_enabled());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod handle;
mod negotiator;
mod platform;

pub use error::{EffectError, Result};
pub use handle::{CapabilityTier, EffectHandle};
pub use negotiator::negotiate;
pub use platform::{EffectPlatform, NoEffectPlatform, SpatializerDevice, VirtualizerDevice};
