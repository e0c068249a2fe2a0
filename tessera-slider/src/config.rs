//! Slider configuration.
//!
//! ## Usage
//!
//! Build a [`SliderConfig`] with the generated setters and hand it to
//! [`crate::slider::SliderController::new`].
//!
//! ```
//! use tessera_slider::config::{LayoutDirection, SliderConfig};
//!
//! let config = SliderConfig::default()
//!     .minimum_value(0.0)
//!     .maximum_value(100.0)
//!     .step(5.0)
//!     .dual_slider(true)
//!     .allow_crossover(false)
//!     .layout_direction(LayoutDirection::Rtl);
//! assert!(config.validate().is_ok());
//! ```
use derive_setters::Setters;
use tracing::warn;

use crate::{animation::AnimationSpec, error::SliderError, geometry::Size};

/// Default logical touch target of a thumb.
pub const DEFAULT_THUMB_TOUCH_SIZE: Size = Size::new(40.0, 40.0);

/// Horizontal layout direction of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    /// Left to right (default).
    #[default]
    Ltr,
    /// Right to left. Ratios are mirrored and thumb offsets negated.
    Rtl,
}

impl LayoutDirection {
    /// Returns `true` for right-to-left layouts.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Configuration of a slider.
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    /// Lower bound of every thumb value.
    pub minimum_value: f32,
    /// Upper bound of every thumb value.
    pub maximum_value: f32,
    /// Quantization step. `0.0` means continuous.
    pub step: f32,
    /// Two thumbs selecting a range instead of one.
    pub dual_slider: bool,
    /// Whether the two thumbs of a dual slider may pass each other.
    pub allow_crossover: bool,
    /// Fill from the zero point instead of the track start (single thumb,
    /// only when the range straddles zero).
    pub start_from_zero: bool,
    /// Whether touching the track (outside any thumb) starts a gesture.
    pub track_clickable: bool,
    /// Vertical slider. Inverts the drag axis.
    pub vertical: bool,
    /// Layout direction of the host.
    pub layout_direction: LayoutDirection,
    /// Logical touch target of each thumb.
    pub thumb_touch_size: Size,
    /// Padding subtracted from the container width when projecting values.
    ///
    /// `None` uses the measured thumb width.
    #[setters(strip_option)]
    pub track_right_padding: Option<f32>,
    /// Animate external value changes instead of jumping.
    pub animate_transitions: bool,
    /// Animation used when `animate_transitions` is set.
    pub animation: AnimationSpec,
    /// Ignore gestures. External value updates still apply.
    pub disabled: bool,
    /// The filled track colour is transparent, so unfilled segments must be
    /// laid out explicitly instead of a full background track.
    pub transparent_fill: bool,
    /// Expose each thumb's touch rectangle in the projected geometry.
    pub debug_touch_area: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum_value: 0.0,
            maximum_value: 1.0,
            step: 0.0,
            dual_slider: false,
            allow_crossover: true,
            start_from_zero: false,
            track_clickable: true,
            vertical: false,
            layout_direction: LayoutDirection::Ltr,
            thumb_touch_size: DEFAULT_THUMB_TOUCH_SIZE,
            track_right_padding: None,
            animate_transitions: false,
            animation: AnimationSpec::default(),
            disabled: false,
            transparent_fill: false,
            debug_touch_area: false,
        }
    }
}

impl SliderConfig {
    /// Number of thumbs this configuration drives.
    pub fn thumb_count(&self) -> usize {
        if self.dual_slider { 2 } else { 1 }
    }

    /// Width of the value range.
    pub fn range(&self) -> f32 {
        self.maximum_value - self.minimum_value
    }

    /// Separation kept between the two thumbs when crossover is disallowed.
    pub fn separation_buffer(&self) -> f32 {
        if self.step > 0.0 { self.step } else { 0.1 }
    }

    /// Whether "start from zero" filling applies to the current range.
    pub fn fills_from_zero(&self) -> bool {
        self.start_from_zero
            && !self.dual_slider
            && self.minimum_value < 0.0
            && self.maximum_value > 0.0
    }

    /// Checks the configuration invariants.
    pub fn validate(&self) -> Result<(), SliderError> {
        if !self.minimum_value.is_finite() || !self.maximum_value.is_finite() {
            return Err(SliderError::NonFiniteBound {
                min: self.minimum_value,
                max: self.maximum_value,
            });
        }
        if self.minimum_value > self.maximum_value {
            return Err(SliderError::InvertedRange {
                min: self.minimum_value,
                max: self.maximum_value,
            });
        }
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(SliderError::InvalidStep(self.step));
        }
        Ok(())
    }

    /// Returns a copy that satisfies [`Self::validate`].
    ///
    /// Non-finite bounds fall back to the defaults, inverted bounds are
    /// swapped and an invalid step becomes continuous.
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();
        while let Err(err) = config.validate() {
            warn!("Invalid slider configuration: {err}; repairing");
            match err {
                SliderError::NonFiniteBound { .. } => {
                    let defaults = Self::default();
                    if !config.minimum_value.is_finite() {
                        config.minimum_value = defaults.minimum_value;
                    }
                    if !config.maximum_value.is_finite() {
                        config.maximum_value = config.minimum_value.max(defaults.maximum_value);
                    }
                }
                SliderError::InvertedRange { min, max } => {
                    config.minimum_value = max;
                    config.maximum_value = min;
                }
                SliderError::InvalidStep(_) => config.step = 0.0,
                SliderError::ThumbOutOfRange { .. } | SliderError::Unmeasured => break,
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_surface() {
        let config = SliderConfig::default();
        assert_eq!(config.minimum_value, 0.0);
        assert_eq!(config.maximum_value, 1.0);
        assert_eq!(config.step, 0.0);
        assert!(!config.dual_slider);
        assert!(config.allow_crossover);
        assert!(!config.start_from_zero);
        assert!(config.track_clickable);
        assert!(!config.vertical);
        assert_eq!(config.thumb_touch_size, Size::new(40.0, 40.0));
        assert_eq!(config.thumb_count(), 1);
    }

    #[test]
    fn validate_reports_violations() {
        let inverted = SliderConfig::default()
            .minimum_value(5.0)
            .maximum_value(1.0);
        assert_eq!(
            inverted.validate(),
            Err(SliderError::InvertedRange { min: 5.0, max: 1.0 })
        );
        let negative_step = SliderConfig::default().step(-1.0);
        assert_eq!(negative_step.validate(), Err(SliderError::InvalidStep(-1.0)));
        let nan = SliderConfig::default().maximum_value(f32::NAN);
        assert!(matches!(
            nan.validate(),
            Err(SliderError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn sanitized_repairs_every_violation() {
        let config = SliderConfig::default()
            .minimum_value(10.0)
            .maximum_value(-10.0)
            .step(f32::INFINITY)
            .sanitized();
        assert_eq!(config.minimum_value, -10.0);
        assert_eq!(config.maximum_value, 10.0);
        assert_eq!(config.step, 0.0);
        assert!(config.validate().is_ok());

        let config = SliderConfig::default()
            .minimum_value(f32::NEG_INFINITY)
            .sanitized();
        assert_eq!(config.minimum_value, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn separation_buffer_follows_step() {
        assert_eq!(SliderConfig::default().separation_buffer(), 0.1);
        assert_eq!(SliderConfig::default().step(5.0).separation_buffer(), 5.0);
    }

    #[test]
    fn fills_from_zero_requires_straddling_range() {
        let config = SliderConfig::default()
            .minimum_value(-10.0)
            .maximum_value(10.0)
            .start_from_zero(true);
        assert!(config.fills_from_zero());
        assert!(!config.clone().minimum_value(0.0).fills_from_zero());
        assert!(!config.dual_slider(true).fills_from_zero());
    }
}
