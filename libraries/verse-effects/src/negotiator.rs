//! Capability tier negotiation

use crate::handle::EffectHandle;
use crate::platform::EffectPlatform;
use tracing::{debug, warn};
use verse_core::types::AudioSessionId;

/// Probe the platform's effect tiers and bind exactly one
///
/// Tiers are attempted in priority order: the modern spatializer (only if it
/// reports itself available), then a session-scoped legacy virtualizer, then
/// `Unavailable`. The result is fixed for the life of the playback session;
/// a failed probe is terminal and is re-attempted only when the session is
/// torn down and recreated.
pub fn negotiate(platform: &dyn EffectPlatform, session: AudioSessionId) -> EffectHandle {
    if let Some(spatializer) = platform.spatializer() {
        if spatializer.is_available() {
            debug!(%session, "bound modern spatializer tier");
            return EffectHandle::Modern(Some(spatializer));
        }
        debug!(%session, "spatializer present but not available, trying legacy tier");
    }

    match platform.create_virtualizer(session) {
        Ok(virtualizer) => {
            debug!(%session, "bound legacy virtualizer tier");
            EffectHandle::Legacy(Some(virtualizer))
        }
        Err(err) => {
            warn!(%session, error = %err, "no effect capability available");
            EffectHandle::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EffectError, Result};
    use crate::handle::CapabilityTier;
    use crate::platform::{NoEffectPlatform, SpatializerDevice, VirtualizerDevice};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FakeSpatializer {
        available: bool,
        enabled: bool,
        releases: Arc<AtomicUsize>,
    }

    impl SpatializerDevice for FakeSpatializer {
        fn is_available(&self) -> bool {
            self.available
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_enabled(&mut self, enabled: bool) -> Result<()> {
            self.enabled = enabled;
            Ok(())
        }

        fn release(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FakeVirtualizer {
        strength_supported: bool,
        enabled: bool,
        strength: u16,
        releases: Arc<AtomicUsize>,
    }

    impl VirtualizerDevice for FakeVirtualizer {
        fn strength_supported(&self) -> bool {
            self.strength_supported
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_enabled(&mut self, enabled: bool) -> Result<()> {
            self.enabled = enabled;
            Ok(())
        }

        fn set_strength(&mut self, strength: u16) -> Result<()> {
            self.strength = strength;
            Ok(())
        }

        fn rounded_strength(&self) -> u16 {
            self.strength
        }

        fn release(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Platform with a configurable pair of tiers
    struct FakePlatform {
        spatializer_available: Option<bool>,
        virtualizer: Option<bool>, // Some(strength_supported) or None to refuse
        spatializer_releases: Arc<AtomicUsize>,
        virtualizer_releases: Arc<AtomicUsize>,
    }

    impl FakePlatform {
        fn new(spatializer_available: Option<bool>, virtualizer: Option<bool>) -> Self {
            Self {
                spatializer_available,
                virtualizer,
                spatializer_releases: Arc::new(AtomicUsize::new(0)),
                virtualizer_releases: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl EffectPlatform for FakePlatform {
        fn spatializer(&self) -> Option<Box<dyn SpatializerDevice>> {
            self.spatializer_available.map(|available| {
                Box::new(FakeSpatializer {
                    available,
                    enabled: false,
                    releases: Arc::clone(&self.spatializer_releases),
                }) as Box<dyn SpatializerDevice>
            })
        }

        fn create_virtualizer(
            &self,
            session: AudioSessionId,
        ) -> Result<Box<dyn VirtualizerDevice>> {
            match self.virtualizer {
                Some(strength_supported) => Ok(Box::new(FakeVirtualizer {
                    strength_supported,
                    enabled: false,
                    strength: 0,
                    releases: Arc::clone(&self.virtualizer_releases),
                })),
                None => Err(EffectError::InvalidSession(session.raw())),
            }
        }
    }

    fn session() -> AudioSessionId {
        AudioSessionId::new(7)
    }

    #[test]
    fn prefers_modern_tier_when_available() {
        let platform = FakePlatform::new(Some(true), Some(true));
        let handle = negotiate(&platform, session());

        assert_eq!(handle.tier(), CapabilityTier::Modern);
        assert!(!handle.strength_supported());
    }

    #[test]
    fn skips_unavailable_spatializer() {
        let platform = FakePlatform::new(Some(false), Some(true));
        let handle = negotiate(&platform, session());

        assert_eq!(handle.tier(), CapabilityTier::Legacy);
    }

    #[test]
    fn falls_back_to_legacy_without_spatializer() {
        let platform = FakePlatform::new(None, Some(true));
        let handle = negotiate(&platform, session());

        assert_eq!(handle.tier(), CapabilityTier::Legacy);
        assert!(!handle.is_enabled(), "legacy tier starts disabled");
    }

    #[test]
    fn neither_tier_yields_unavailable() {
        let handle = negotiate(&NoEffectPlatform, session());
        assert_eq!(handle.tier(), CapabilityTier::Unavailable);
    }

    #[test]
    fn unavailable_mutations_are_noops() {
        let mut handle = negotiate(&NoEffectPlatform, session());

        handle.set_enabled(true);
        handle.set_strength(500);
        handle.release();
        handle.release();

        assert!(!handle.is_enabled());
        assert!(!handle.strength_supported());
        assert_eq!(handle.strength(), 0);
    }

    #[test]
    fn modern_tier_toggles_enable() {
        let platform = FakePlatform::new(Some(true), None);
        let mut handle = negotiate(&platform, session());

        assert!(!handle.is_enabled());
        handle.set_enabled(true);
        assert!(handle.is_enabled());
        handle.set_enabled(false);
        assert!(!handle.is_enabled());
    }

    #[test]
    fn set_strength_clamps_input() {
        let platform = FakePlatform::new(None, Some(true));
        let mut handle = negotiate(&platform, session());

        handle.set_strength(-5);
        assert_eq!(handle.strength(), 0);

        handle.set_strength(5000);
        assert_eq!(handle.strength(), 1000);

        handle.set_strength(750);
        assert_eq!(handle.strength(), 750);
    }

    #[test]
    fn set_strength_without_support_is_noop() {
        let platform = FakePlatform::new(None, Some(false));
        let mut handle = negotiate(&platform, session());

        assert!(!handle.strength_supported());
        handle.set_strength(800);
        assert_eq!(handle.strength(), 0);
    }

    #[test]
    fn release_frees_device_exactly_once() {
        let platform = FakePlatform::new(None, Some(true));
        let mut handle = negotiate(&platform, session());

        handle.release();
        handle.release();
        handle.release();

        assert_eq!(platform.virtualizer_releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn released_handle_behaves_like_unavailable() {
        let platform = FakePlatform::new(None, Some(true));
        let mut handle = negotiate(&platform, session());

        handle.set_enabled(true);
        handle.release();

        assert!(!handle.is_enabled());
        assert!(!handle.strength_supported());
        handle.set_enabled(true); // must not fault
        assert!(!handle.is_enabled());
    }

    #[test]
    fn apply_settings_drives_enable_and_strength() {
        use verse_core::types::EffectSettings;

        let platform = FakePlatform::new(None, Some(true));
        let mut handle = negotiate(&platform, session());

        let settings = EffectSettings {
            enabled: true,
            virtualizer_strength: 650,
            ..Default::default()
        };
        handle.apply_settings(&settings);

        assert!(handle.is_enabled());
        assert_eq!(handle.strength(), 650);
    }
}
