//! Error type for the counter crate.

use crate::animator::ElementId;

/// Errors returned by [`crate::CounterAnimator`] and [`crate::CounterConfig`].
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    /// A visibility report named an element that was never registered.
    #[error("unknown counter element: {0}")]
    UnknownElement(ElementId),
    /// Duration must be finite and strictly positive.
    #[error("invalid animation duration: {0} ms")]
    InvalidDuration(f64),
    /// Threshold must lie in `(0, 1]`.
    #[error("invalid visibility threshold: {0}")]
    InvalidThreshold(f64),
    /// The JSON config could not be decoded.
    #[error("invalid counter config: {0}")]
    Config(#[from] serde_json::Error),
}
