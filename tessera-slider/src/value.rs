//! Normalization of externally supplied values.
//!
//! Hosts may hand the slider nothing, a scalar or a sequence. [`normalize`]
//! turns any of those into the canonical [`ValueSet`]: one value for a
//! single slider, exactly two for a dual slider, every value inside
//! `[minimum_value, maximum_value]`.
use smallvec::{SmallVec, smallvec};
use tracing::{debug, warn};

use crate::config::SliderConfig;

/// Ordered thumb values. Length 1 in single mode, 2 in dual mode.
pub type ValueSet = SmallVec<[f32; 2]>;

/// Half-width of the window synthesized around a lone dual-slider value,
/// as a fraction of the range.
const SYNTHESIZED_WINDOW: f32 = 0.1;

/// A value as supplied by the host.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RawValue {
    /// No value supplied.
    #[default]
    Absent,
    /// A single number.
    Scalar(f32),
    /// A list of numbers.
    Sequence(Vec<f32>),
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        Self::Scalar(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value as f32)
    }
}

impl From<Vec<f32>> for RawValue {
    fn from(values: Vec<f32>) -> Self {
        Self::Sequence(values)
    }
}

impl From<&[f32]> for RawValue {
    fn from(values: &[f32]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for RawValue {
    fn from(values: [f32; N]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Clamps `value` into the configured bounds.
///
/// NaN collapses to the lower bound; infinities clamp to the nearest bound.
/// Inverted bounds are treated as the range between them.
pub fn clamp_value(config: &SliderConfig, value: f32) -> f32 {
    let lower = config.minimum_value.min(config.maximum_value);
    let upper = config.minimum_value.max(config.maximum_value);
    if value.is_nan() {
        warn!("NaN slider value replaced with minimum {lower}");
        return lower;
    }
    value.max(lower).min(upper)
}

/// Converts a host value into the canonical [`ValueSet`].
///
/// `config` is expected to be sanitized (see [`SliderConfig::sanitized`]).
///
/// # Examples
///
/// ```
/// use tessera_slider::{
///     config::SliderConfig,
///     value::{RawValue, normalize},
/// };
///
/// let config = SliderConfig::default().maximum_value(100.0).dual_slider(true);
/// assert_eq!(normalize(&config, &RawValue::Sequence(vec![50.0])).as_slice(), &[40.0, 60.0]);
/// ```
pub fn normalize(config: &SliderConfig, raw: &RawValue) -> ValueSet {
    if config.dual_slider {
        normalize_dual(config, raw)
    } else {
        normalize_single(config, raw)
    }
}

fn normalize_single(config: &SliderConfig, raw: &RawValue) -> ValueSet {
    match raw {
        RawValue::Absent => smallvec![clamp_value(config, 0.0)],
        RawValue::Scalar(value) => smallvec![clamp_value(config, *value)],
        RawValue::Sequence(values) if values.is_empty() => smallvec![clamp_value(config, 0.0)],
        RawValue::Sequence(values) => {
            let mut sorted: Vec<f32> = values.iter().map(|v| clamp_value(config, *v)).collect();
            sorted.sort_by(f32::total_cmp);
            if sorted.len() > 1 {
                debug!(
                    dropped = sorted.len() - 1,
                    "single slider keeps only the lowest supplied value"
                );
            }
            smallvec![sorted[0]]
        }
    }
}

fn normalize_dual(config: &SliderConfig, raw: &RawValue) -> ValueSet {
    match raw {
        RawValue::Absent => smallvec![config.minimum_value, config.maximum_value],
        RawValue::Scalar(value) => synthesize_window(config, *value),
        RawValue::Sequence(values) => match values.as_slice() {
            [] => smallvec![config.minimum_value, config.maximum_value],
            [value] => synthesize_window(config, *value),
            [first, second, ..] => {
                let first = clamp_value(config, *first);
                let second = clamp_value(config, *second);
                if !config.allow_crossover && first > second {
                    smallvec![second, first]
                } else {
                    smallvec![first, second]
                }
            }
        },
    }
}

/// Window `[v - 10%, v + 10%]` around the raw value, each end clamped.
fn synthesize_window(config: &SliderConfig, center: f32) -> ValueSet {
    let half = config.range().abs() * SYNTHESIZED_WINDOW;
    smallvec![
        clamp_value(config, center - half),
        clamp_value(config, center + half)
    ]
}

/// Converts host track marks into clamped mark positions.
///
/// Marks keep their given order and count; absent marks yield an empty set.
pub fn normalize_marks(config: &SliderConfig, raw: &RawValue) -> SmallVec<[f32; 4]> {
    match raw {
        RawValue::Absent => SmallVec::new(),
        RawValue::Scalar(value) => smallvec![clamp_value(config, *value)],
        RawValue::Sequence(values) => values.iter().map(|v| clamp_value(config, *v)).collect(),
    }
}
