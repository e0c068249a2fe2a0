//! Projects thumb values onto the track for presentation.
//!
//! ## Coordinates
//!
//! - Thumb offsets are translations along the track. Under a right-to-left
//!   layout they are negated, since the host mirrors positions but not
//!   translations.
//! - Track segments are measured from the track's leading edge; the host
//!   mirrors them together with the rest of the layout.
use smallvec::SmallVec;

use crate::{
    config::SliderConfig,
    geometry::Rect,
    hit_test::ThumbPicker,
    measure::Measurements,
};

/// Fraction of the range `value` sits at. Zero for an empty range.
pub fn value_ratio(config: &SliderConfig, value: f32) -> f32 {
    let range = config.range();
    if range > 0.0 {
        (value - config.minimum_value) / range
    } else {
        0.0
    }
}

/// Physical left edge of a thumb showing `value`, in container space.
///
/// This is the position gestures and hit tests work with: the ratio is
/// mirrored under right-to-left layouts and scaled by the drag length
/// (`container.width - thumb.width`). Zero while unmeasured.
pub fn thumb_left(config: &SliderConfig, measurements: &Measurements, value: f32) -> f32 {
    let Ok(length) = measurements.track_length() else {
        return 0.0;
    };
    let ratio = value_ratio(config, value);
    let ratio = if config.layout_direction.is_rtl() {
        1.0 - ratio
    } else {
        ratio
    };
    ratio * length
}

/// A horizontal run of the track.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TrackSegment {
    /// Distance from the track's leading edge.
    pub start: f32,
    /// Length along the track, never negative.
    pub length: f32,
    /// Whether the leading end keeps its rounded corners.
    pub round_start: bool,
    /// Whether the trailing end keeps its rounded corners.
    pub round_end: bool,
}

impl TrackSegment {
    fn between(start: f32, end: f32) -> Self {
        Self {
            start,
            length: (end - start).max(0.0),
            round_start: true,
            round_end: true,
        }
    }

    /// End of the segment.
    pub fn end(&self) -> f32 {
        self.start + self.length
    }
}

/// Everything the presentation layer needs to place a slider.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SliderGeometry {
    /// Both container and thumb have been measured.
    pub all_measured: bool,
    /// Opacity for every positioned element; zero until measured.
    pub opacity: f32,
    /// Translation of each thumb, by thumb index.
    pub thumb_offsets: SmallVec<[f32; 2]>,
    /// Index of the thumb currently nearest the leading edge.
    pub leading_thumb: usize,
    /// Filled (selected) part of the track.
    pub filled: Option<TrackSegment>,
    /// Full background track, present unless the fill is transparent.
    pub background: Option<TrackSegment>,
    /// Unselected parts of the track, present only when the fill is
    /// transparent.
    pub unfilled: SmallVec<[TrackSegment; 2]>,
    /// Translation of each track mark.
    pub mark_offsets: SmallVec<[f32; 4]>,
    /// Touch rectangle of each thumb, when touch areas are debugged.
    pub touch_areas: SmallVec<[Rect; 2]>,
}

impl SliderGeometry {
    fn hidden(thumbs: usize, marks: usize) -> Self {
        Self {
            all_measured: false,
            opacity: 0.0,
            thumb_offsets: SmallVec::from_elem(0.0, thumbs),
            leading_thumb: 0,
            filled: None,
            background: None,
            unfilled: SmallVec::new(),
            mark_offsets: SmallVec::from_elem(0.0, marks),
            touch_areas: SmallVec::new(),
        }
    }
}

struct Projection<'a> {
    config: &'a SliderConfig,
    length: f32,
    thumb_width: f32,
}

impl Projection<'_> {
    fn position(&self, value: f32) -> f32 {
        value_ratio(self.config, value) * self.length
    }

    fn offset(&self, value: f32) -> f32 {
        let position = self.position(value);
        if self.config.layout_direction.is_rtl() {
            -position
        } else {
            position
        }
    }

    fn center(&self, value: f32) -> f32 {
        self.position(value) + self.thumb_width / 2.0
    }
}

/// Projects `values` and `marks` onto the measured track.
///
/// Returns hidden geometry (zero offsets, no segments, zero opacity) until
/// both sizes are measured.
pub fn project(
    config: &SliderConfig,
    measurements: &Measurements,
    values: &[f32],
    marks: &[f32],
) -> SliderGeometry {
    let (Ok((container, thumb)), Ok(length)) =
        (measurements.sizes(), measurements.projection_length(config))
    else {
        return SliderGeometry::hidden(values.len(), marks.len());
    };

    let projection = Projection {
        config,
        length,
        thumb_width: thumb.width,
    };
    let track_end = container.width;

    let crossed = values.len() == 2 && values[0] > values[1];
    let (leading, trailing) = if crossed { (1, 0) } else { (0, 1) };

    let filled = match values {
        [] => None,
        [value] if config.fills_from_zero() => {
            let zero = projection.position(0.0);
            let position = projection.position(*value);
            let start = zero.min(position) + thumb.width / 2.0;
            Some(TrackSegment {
                start,
                length: (position - zero).abs(),
                round_start: *value < 0.0,
                round_end: *value >= 0.0,
            })
        }
        [value] => Some(TrackSegment::between(0.0, projection.center(*value))),
        _ => Some(TrackSegment::between(
            projection.center(values[leading]),
            projection.center(values[trailing]),
        )),
    };

    let (background, unfilled) = match filled {
        Some(filled) if config.transparent_fill => {
            let mut unfilled = SmallVec::new();
            if filled.start > 0.0 {
                unfilled.push(TrackSegment::between(0.0, filled.start));
            }
            unfilled.push(TrackSegment::between(filled.end(), track_end));
            (None, unfilled)
        }
        _ => (Some(TrackSegment::between(0.0, track_end)), SmallVec::new()),
    };

    let touch_areas = if config.debug_touch_area {
        ThumbPicker::new(config, measurements, values)
            .rects()
            .iter()
            .copied()
            .collect()
    } else {
        SmallVec::new()
    };

    SliderGeometry {
        all_measured: true,
        opacity: 1.0,
        thumb_offsets: values.iter().map(|v| projection.offset(*v)).collect(),
        leading_thumb: if values.len() == 2 { leading } else { 0 },
        filled,
        background,
        unfilled,
        mark_offsets: marks.iter().map(|m| projection.offset(*m)).collect(),
        touch_areas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::LayoutDirection, geometry::Size};

    fn measured() -> Measurements {
        Measurements {
            container: Some(Size::new(220.0, 40.0)),
            thumb: Some(Size::new(20.0, 20.0)),
        }
    }

    fn config() -> SliderConfig {
        SliderConfig::default().maximum_value(100.0)
    }

    #[test]
    fn offsets_interpolate_over_track() {
        let geometry = project(&config(), &measured(), &[0.0], &[]);
        assert_eq!(geometry.thumb_offsets.as_slice(), &[0.0]);
        let geometry = project(&config(), &measured(), &[100.0], &[]);
        assert_eq!(geometry.thumb_offsets.as_slice(), &[200.0]);
        assert_eq!(geometry.opacity, 1.0);
        assert!(geometry.all_measured);
    }

    #[test]
    fn rtl_offsets_mirror_ltr() {
        let rtl = config().layout_direction(LayoutDirection::Rtl);
        let min = project(&rtl, &measured(), &[0.0], &[]);
        let max = project(&rtl, &measured(), &[100.0], &[]);
        assert_eq!(min.thumb_offsets[0], 0.0);
        assert_eq!(max.thumb_offsets[0], -200.0);
    }

    #[test]
    fn right_padding_shortens_projection() {
        let padded = config().track_right_padding(60.0);
        let geometry = project(&padded, &measured(), &[100.0], &[50.0]);
        assert_eq!(geometry.thumb_offsets[0], 160.0);
        assert_eq!(geometry.mark_offsets.as_slice(), &[80.0]);
    }

    #[test]
    fn single_fill_runs_from_track_start() {
        let geometry = project(&config(), &measured(), &[50.0], &[]);
        assert_eq!(
            geometry.filled,
            Some(TrackSegment {
                start: 0.0,
                length: 110.0,
                round_start: true,
                round_end: true,
            })
        );
        assert_eq!(geometry.background.map(|b| b.length), Some(220.0));
        assert!(geometry.unfilled.is_empty());
    }

    #[test]
    fn start_from_zero_fills_from_zero_point() {
        let config = SliderConfig::default()
            .minimum_value(-50.0)
            .maximum_value(50.0)
            .start_from_zero(true);

        let positive = project(&config, &measured(), &[25.0], &[]).filled.unwrap();
        assert_eq!(positive.start, 110.0);
        assert_eq!(positive.length, 50.0);
        assert!(!positive.round_start);
        assert!(positive.round_end);

        let negative = project(&config, &measured(), &[-25.0], &[]).filled.unwrap();
        assert_eq!(negative.start, 60.0);
        assert_eq!(negative.length, 50.0);
        assert!(negative.round_start);
        assert!(!negative.round_end);
    }

    #[test]
    fn start_from_zero_ignored_without_straddling_range() {
        let config = config().start_from_zero(true);
        let filled = project(&config, &measured(), &[50.0], &[]).filled.unwrap();
        assert_eq!(filled.start, 0.0);
    }

    #[test]
    fn dual_fill_spans_thumbs_and_swaps_on_crossover() {
        let config = config().dual_slider(true);
        let ordered = project(&config, &measured(), &[25.0, 75.0], &[]);
        let crossed = project(&config, &measured(), &[75.0, 25.0], &[]);

        let expected = TrackSegment::between(60.0, 160.0);
        assert_eq!(ordered.filled, Some(expected));
        assert_eq!(crossed.filled, Some(expected));
        assert_eq!(ordered.leading_thumb, 0);
        assert_eq!(crossed.leading_thumb, 1);
        assert_eq!(crossed.thumb_offsets.as_slice(), &[150.0, 50.0]);
    }

    #[test]
    fn transparent_fill_lays_out_unfilled_complement() {
        let config = config().dual_slider(true).transparent_fill(true);
        let geometry = project(&config, &measured(), &[75.0, 25.0], &[]);
        assert!(geometry.background.is_none());
        assert_eq!(
            geometry.unfilled.as_slice(),
            &[
                TrackSegment::between(0.0, 60.0),
                TrackSegment::between(160.0, 220.0)
            ]
        );

        let single = config.dual_slider(false);
        let geometry = project(&single, &measured(), &[50.0], &[]);
        assert_eq!(
            geometry.unfilled.as_slice(),
            &[TrackSegment::between(110.0, 220.0)]
        );
    }

    #[test]
    fn unmeasured_geometry_is_hidden_and_finite() {
        let partial = Measurements {
            container: Some(Size::new(220.0, 40.0)),
            thumb: None,
        };
        for measurements in [Measurements::default(), partial] {
            let geometry = project(&config(), &measurements, &[30.0, 70.0], &[10.0]);
            assert!(!geometry.all_measured);
            assert_eq!(geometry.opacity, 0.0);
            assert!(geometry.thumb_offsets.iter().all(|o| *o == 0.0));
            assert!(geometry.mark_offsets.iter().all(|o| o.is_finite()));
            assert!(geometry.filled.is_none());
        }
    }

    #[test]
    fn degenerate_range_projects_to_start() {
        let flat = SliderConfig::default().minimum_value(5.0).maximum_value(5.0);
        let geometry = project(&flat, &measured(), &[5.0], &[]);
        assert_eq!(geometry.thumb_offsets[0], 0.0);
        assert!(geometry.thumb_offsets[0].is_finite());
    }

    #[test]
    fn debug_touch_areas_match_hit_test() {
        let config = config().debug_touch_area(true);
        let geometry = project(&config, &measured(), &[50.0], &[]);
        assert_eq!(geometry.touch_areas.as_slice(), &[Rect::new(100.0, 0.0, 40.0, 40.0)]);
    }

    #[test]
    fn thumb_left_mirrors_for_gestures() {
        let rtl = config().layout_direction(LayoutDirection::Rtl);
        assert_eq!(thumb_left(&rtl, &measured(), 25.0), 150.0);
        assert_eq!(thumb_left(&config(), &Measurements::default(), 25.0), 0.0);
    }
}
