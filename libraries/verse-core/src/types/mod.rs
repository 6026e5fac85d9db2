//! Core domain types for Verse Player

mod effects;
mod media_item;
mod player;

pub use effects::{AudioSessionId, EffectSettings, MAX_EFFECT_STRENGTH, NO_PRESET};
pub use media_item::{MediaItemId, MediaItemState};
pub use player::{PlayerSnapshot, PlayerState, VolumeProbe};
