//! Error types for effect capability probing

use thiserror::Error;

/// Result type alias using `EffectError`
pub type Result<T> = std::result::Result<T, EffectError>;

/// Errors raised by platform effect devices during probing or control
///
/// These never escape the crate's public surface: negotiation degrades to
/// `Unavailable` and handle mutations log and continue.
#[derive(Error, Debug)]
pub enum EffectError {
    /// The platform refused to construct or drive the effect
    #[error("Effect platform error: {0}")]
    Platform(String),

    /// The audio session id was rejected
    #[error("Invalid audio session: {0}")]
    InvalidSession(i32),

    /// No effect facility exists on this platform
    #[error("Effect facility absent")]
    FacilityAbsent,
}

impl From<EffectError> for verse_core::VerseError {
    fn from(err: EffectError) -> Self {
        verse_core::VerseError::effect(err.to_string())
    }
}
