//! Maps drag gestures to thumb values.
//!
//! A [`GestureSession`] lives from grant to release. It remembers which thumb
//! is being dragged and the pixel anchor the drag deltas are added to; it is
//! dropped when the gesture ends.
use tracing::{trace, warn};

use crate::{
    config::SliderConfig,
    error::SliderError,
    geometry::Point,
    hit_test::Hit,
    measure::Measurements,
    projector::thumb_left,
    value::clamp_value,
};

/// Maps a track ratio to a value, snapping to `step` when it is positive.
///
/// The result is not clamped.
pub fn quantize(config: &SliderConfig, ratio: f32) -> f32 {
    let range = config.range();
    if config.step > 0.0 {
        config.minimum_value + ((ratio * range) / config.step).round() * config.step
    } else {
        config.minimum_value + ratio * range
    }
}

/// Allowed `(min, max)` for the thumb at `active_index`.
///
/// Without crossover, a dual slider keeps the dragged thumb at least
/// [`SliderConfig::separation_buffer`] away from the other one.
pub fn crossover_bounds(config: &SliderConfig, values: &[f32], active_index: usize) -> (f32, f32) {
    let mut min = config.minimum_value;
    let mut max = config.maximum_value;
    if !config.allow_crossover && values.len() == 2 {
        let buffer = config.separation_buffer();
        if active_index == 1 {
            min = values[0] + buffer;
        } else {
            max = values[1] - buffer;
        }
    }
    (min, max)
}

/// State of one press-drag-release interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    active_index: usize,
    previous_left: f32,
}

impl GestureSession {
    /// Starts a session for the thumb selected by `hit`.
    ///
    /// A thumb touch anchors the drag at the thumb's current left edge. A
    /// track touch anchors it at the touch location, so the thumb centre
    /// follows the finger. Returns `None` for a miss.
    pub fn drag_start(
        config: &SliderConfig,
        measurements: &Measurements,
        values: &[f32],
        hit: Hit,
        location: Point,
    ) -> Option<Self> {
        let previous_left = match hit {
            Hit::Thumb(index) => thumb_left(config, measurements, *values.get(index)?),
            Hit::Track(index) => {
                values.get(index)?;
                let overflow = measurements.touch_overflow(config);
                let thumb = measurements.thumb.unwrap_or_default();
                location.x - overflow.width / 2.0 - thumb.width / 2.0
            }
            Hit::Miss => return None,
        };
        let active_index = hit.thumb_index()?;
        trace!(active_index, previous_left, "gesture session started");
        Some(Self {
            active_index,
            previous_left,
        })
    }

    /// Index of the thumb being dragged.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Pixel anchor captured at grant.
    pub fn previous_left(&self) -> f32 {
        self.previous_left
    }

    /// Value for the active thumb after a cumulative drag of `delta`.
    ///
    /// `values` are the current thumb values, used for the crossover guard.
    /// Errors with [`SliderError::Unmeasured`] while the track has no
    /// positive length.
    pub fn drag_value(
        &self,
        config: &SliderConfig,
        measurements: &Measurements,
        values: &[f32],
        delta: Point,
    ) -> Result<f32, SliderError> {
        let length = measurements.track_length()?;
        let mut along = if config.vertical { -delta.y } else { delta.x };
        if !along.is_finite() {
            warn!("Ignoring non-finite drag delta {delta:?}");
            along = 0.0;
        }

        let left = self.previous_left + along;
        let ratio = left / length;
        let ratio = if config.layout_direction.is_rtl() {
            1.0 - ratio
        } else {
            ratio
        };

        let (min, max) = crossover_bounds(config, values, self.active_index);
        let candidate = quantize(config, ratio);
        let value = clamp_value(config, min.max(candidate.min(max)));
        trace!(ratio, candidate, value, "drag value");
        Ok(value)
    }
}
