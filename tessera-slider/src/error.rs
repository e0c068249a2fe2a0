//! Errors reported by the slider core.
//!
//! None of these reach the host. [`crate::slider::SliderController`] recovers
//! from each locally by sanitizing, ignoring or deferring the operation.

use thiserror::Error;

/// Failure modes of slider core operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SliderError {
    /// The minimum value is greater than the maximum value.
    #[error("minimum value {min} exceeds maximum value {max}")]
    InvertedRange {
        /// Configured minimum.
        min: f32,
        /// Configured maximum.
        max: f32,
    },
    /// The step is negative or not finite.
    #[error("step must be finite and non-negative, got {0}")]
    InvalidStep(f32),
    /// One of the bounds is NaN or infinite.
    #[error("bounds must be finite, got [{min}, {max}]")]
    NonFiniteBound {
        /// Configured minimum.
        min: f32,
        /// Configured maximum.
        max: f32,
    },
    /// A thumb index past the number of thumbs was addressed.
    #[error("thumb index {index} out of range for {len} thumb(s)")]
    ThumbOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of thumbs.
        len: usize,
    },
    /// Container or thumb size has not been measured yet, or the usable track
    /// length is not positive.
    #[error("slider geometry is not measured yet")]
    Unmeasured,
}
