//! Error types for sprite construction and playback.

use thiserror::Error;

/// Errors raised by the sprite animation core.
///
/// All variants are synchronous, non-retryable caller errors: they are
/// returned immediately by the call that triggered them and nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// A position coordinate was not a finite number.
    #[error("invalid position coordinates: ({x}, {y})")]
    InvalidArgument {
        /// Offending x coordinate.
        x: f32,
        /// Offending y coordinate.
        y: f32,
    },

    /// The requested animation name is not registered in the sprite's set.
    #[error("animation \"{0}\" is not defined")]
    UnknownAnimation(String),

    /// Draw was requested before the first update after an animation switch,
    /// so no frame has been selected yet.
    #[error("no frame selected yet; call update() after set_current_anim()")]
    NotInitialized,

    /// An animation definition does not fit the sprite's frame sequence.
    #[error("animation \"{name}\": {reason}")]
    InvalidDefinition {
        /// Name of the offending animation.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An animation set could not be (de)serialized.
    #[error("malformed animation set: {0}")]
    MalformedSet(#[from] serde_json::Error),
}
