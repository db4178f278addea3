// Typed errors with thiserror. Surface meaningful messages to JS.
// Build-time degradation (empty source, zero width, missing tween capability)
// is deliberate no-op behavior, not an error; this covers boundary faults only.

use thiserror::Error;

/// Marquee engine error types.
#[derive(Error, Debug)]
pub enum MarqueeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MarqueeError {
    fn from(err: serde_json::Error) -> Self {
        MarqueeError::Serialization(err.to_string())
    }
}
