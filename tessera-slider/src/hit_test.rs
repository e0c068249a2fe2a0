//! Decides which thumb a touch belongs to.
//!
//! Touch locations are expressed in the touch surface, which is the container
//! grown by half the touch overflow on every side. Each thumb gets a touch
//! rectangle centered on it and sized to its logical touch target.
use smallvec::SmallVec;
use tracing::trace;

use crate::{
    config::SliderConfig,
    geometry::{Point, Rect},
    measure::Measurements,
    projector::thumb_left,
};

/// Outcome of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The touch landed inside the thumb's touch rectangle.
    Thumb(usize),
    /// The touch landed on the clickable track; the thumb is the closest one.
    Track(usize),
    /// Nothing to drag.
    Miss,
}

impl Hit {
    /// Index of the selected thumb.
    pub fn thumb_index(self) -> Option<usize> {
        match self {
            Self::Thumb(index) | Self::Track(index) => Some(index),
            Self::Miss => None,
        }
    }
}

/// Touch rectangle of the thumb currently showing `value`.
pub fn thumb_touch_rect(config: &SliderConfig, measurements: &Measurements, value: f32) -> Rect {
    let touch = measurements.touch_size(config);
    let overflow = measurements.touch_overflow(config);
    let container = measurements.container.unwrap_or_default();
    let thumb = measurements.thumb.unwrap_or_default();
    let center = Point::new(
        overflow.width / 2.0 + thumb_left(config, measurements, value) + thumb.width / 2.0,
        (overflow.height + container.height) / 2.0,
    );
    Rect::centered(center, touch)
}

/// Touch rectangles for a set of thumb values, picked by index.
#[derive(Debug, Clone)]
pub struct ThumbPicker {
    rects: SmallVec<[Rect; 2]>,
    track_clickable: bool,
}

impl ThumbPicker {
    /// Builds touch rectangles for every thumb value.
    pub fn new(config: &SliderConfig, measurements: &Measurements, values: &[f32]) -> Self {
        Self {
            rects: values
                .iter()
                .map(|value| thumb_touch_rect(config, measurements, *value))
                .collect(),
            track_clickable: config.track_clickable,
        }
    }

    /// The touch rectangle of every thumb, in index order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Selects the thumb a touch at `point` targets.
    ///
    /// The first rectangle containing the point wins. Otherwise, on a
    /// clickable track the horizontally closest thumb is chosen; ties go to
    /// the lower index.
    pub fn pick(&self, point: Point) -> Hit {
        if let Some(index) = self.rects.iter().position(|rect| rect.contains(point)) {
            trace!(index, "touch inside thumb");
            return Hit::Thumb(index);
        }
        if !self.track_clickable || self.rects.is_empty() {
            return Hit::Miss;
        }

        let mut closest = 0;
        let mut closest_distance = f32::INFINITY;
        for (index, rect) in self.rects.iter().enumerate() {
            let distance = rect.horizontal_distance(point.x);
            if distance < closest_distance {
                closest = index;
                closest_distance = distance;
            }
        }
        trace!(index = closest, distance = closest_distance, "track touch");
        Hit::Track(closest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

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
    fn touch_rect_is_centered_on_thumb() {
        let rect = thumb_touch_rect(&config(), &measured(), 50.0);
        // overflow = (40 - 20, 40 - 40); thumb left = 0.5 * 200
        assert_eq!(rect, Rect::new(10.0 + 100.0 - 10.0, 0.0, 40.0, 40.0));
    }

    #[test]
    fn oversized_thumb_widens_touch_rect() {
        let measurements = Measurements {
            container: Some(Size::new(260.0, 40.0)),
            thumb: Some(Size::new(60.0, 30.0)),
        };
        let rect = thumb_touch_rect(&config(), &measurements, 0.0);
        assert_eq!(rect.width, 60.0);
        assert_eq!(rect.height, 40.0);
        assert_eq!(rect.x, 0.0);
    }

    #[test]
    fn first_containing_rect_wins() {
        let config = config().dual_slider(true);
        let picker = ThumbPicker::new(&config, &measured(), &[50.0, 51.0]);
        assert_eq!(picker.pick(Point::new(112.0, 20.0)), Hit::Thumb(0));
        assert_eq!(picker.pick(Point::new(145.0, 20.0)), Hit::Track(1));
    }

    #[test]
    fn track_touch_selects_nearest_thumb() {
        let config = config().dual_slider(true);
        let picker = ThumbPicker::new(&config, &measured(), &[10.0, 90.0]);
        assert_eq!(picker.pick(Point::new(100.0, 20.0)), Hit::Track(0));
        assert_eq!(picker.pick(Point::new(170.0, 20.0)), Hit::Track(1));
    }

    #[test]
    fn equidistant_track_touch_selects_lower_index() {
        let config = config().dual_slider(true);
        let picker = ThumbPicker::new(&config, &measured(), &[25.0, 75.0]);
        let [first, second] = [picker.rects()[0], picker.rects()[1]];
        let midpoint = (first.right() + second.x) / 2.0;
        assert_eq!(picker.pick(Point::new(midpoint, 20.0)), Hit::Track(0));
    }

    #[test]
    fn single_thumb_track_touch_selects_it() {
        let picker = ThumbPicker::new(&config(), &measured(), &[0.0]);
        assert_eq!(picker.pick(Point::new(200.0, 20.0)), Hit::Track(0));
    }

    #[test]
    fn unclickable_track_misses() {
        let config = config().track_clickable(false);
        let picker = ThumbPicker::new(&config, &measured(), &[0.0]);
        assert_eq!(picker.pick(Point::new(200.0, 20.0)), Hit::Miss);
        assert_eq!(Hit::Miss.thumb_index(), None);
        assert_eq!(picker.pick(Point::new(20.0, 20.0)), Hit::Thumb(0));
    }
}
