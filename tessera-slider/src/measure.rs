//! Layout measurements reported by the presentation layer.
//!
//! Container and thumb sizes arrive asynchronously and in either order.
//! Until both are known the slider is "unmeasured": positions are computed
//! as zero and presented at zero opacity.
use crate::{config::SliderConfig, error::SliderError, geometry::Size};

/// Sizes measured by the host.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Size of the slider container.
    pub container: Option<Size>,
    /// Size of a single thumb.
    pub thumb: Option<Size>,
}

impl Measurements {
    /// Both sizes present and positive.
    pub fn all_measured(&self) -> bool {
        matches!(
            (self.container, self.thumb),
            (Some(container), Some(thumb)) if container.is_positive() && thumb.is_positive()
        )
    }

    /// Returns `(container, thumb)` once measured.
    pub fn sizes(&self) -> Result<(Size, Size), SliderError> {
        match (self.container, self.thumb) {
            (Some(container), Some(thumb)) if self.all_measured() => Ok((container, thumb)),
            _ => Err(SliderError::Unmeasured),
        }
    }

    /// Usable drag length, `container.width - thumb.width`.
    ///
    /// Errors with [`SliderError::Unmeasured`] when the length is not
    /// positive, so callers never divide by it.
    pub fn track_length(&self) -> Result<f32, SliderError> {
        let (container, thumb) = self.sizes()?;
        let length = container.width - thumb.width;
        if length > 0.0 && length.is_finite() {
            Ok(length)
        } else {
            Err(SliderError::Unmeasured)
        }
    }

    /// Length onto which values are projected for presentation,
    /// `container.width - right_padding`, floored at zero.
    pub fn projection_length(&self, config: &SliderConfig) -> Result<f32, SliderError> {
        let (container, thumb) = self.sizes()?;
        let padding = config.track_right_padding.unwrap_or(thumb.width);
        let length = container.width - padding;
        if length.is_finite() {
            Ok(length.max(0.0))
        } else {
            Err(SliderError::Unmeasured)
        }
    }

    /// Logical touch target of a thumb: never smaller than the visible thumb.
    pub fn touch_size(&self, config: &SliderConfig) -> Size {
        match self.thumb {
            Some(thumb) => config.thumb_touch_size.max(thumb),
            None => config.thumb_touch_size,
        }
    }

    /// How far the touch area extends past the measured elements.
    ///
    /// Width is measured against the thumb and height against the container;
    /// both are zero until measured.
    pub fn touch_overflow(&self, config: &SliderConfig) -> Size {
        let Ok((container, thumb)) = self.sizes() else {
            return Size::ZERO;
        };
        let touch = self.touch_size(config);
        Size::new(
            (touch.width - thumb.width).max(0.0),
            (touch.height - container.height).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(container: Size, thumb: Size) -> Measurements {
        Measurements {
            container: Some(container),
            thumb: Some(thumb),
        }
    }

    #[test]
    fn partial_measurement_is_unready() {
        let only_container = Measurements {
            container: Some(Size::new(200.0, 40.0)),
            thumb: None,
        };
        assert!(!only_container.all_measured());
        assert_eq!(only_container.track_length(), Err(SliderError::Unmeasured));

        let only_thumb = Measurements {
            container: None,
            thumb: Some(Size::new(20.0, 20.0)),
        };
        assert!(!only_thumb.all_measured());
        assert_eq!(
            only_thumb.projection_length(&SliderConfig::default()),
            Err(SliderError::Unmeasured)
        );
    }

    #[test]
    fn non_positive_track_length_is_unready() {
        let cramped = measured(Size::new(20.0, 40.0), Size::new(20.0, 20.0));
        assert!(cramped.all_measured());
        assert_eq!(cramped.track_length(), Err(SliderError::Unmeasured));
        assert_eq!(
            cramped.projection_length(&SliderConfig::default()),
            Ok(0.0)
        );
    }

    #[test]
    fn projection_length_uses_right_padding() {
        let sizes = measured(Size::new(220.0, 40.0), Size::new(20.0, 20.0));
        assert_eq!(sizes.track_length(), Ok(200.0));
        assert_eq!(sizes.projection_length(&SliderConfig::default()), Ok(200.0));
        let padded = SliderConfig::default().track_right_padding(40.0);
        assert_eq!(sizes.projection_length(&padded), Ok(180.0));
    }

    #[test]
    fn touch_target_is_at_least_the_visible_thumb() {
        let config = SliderConfig::default();
        let small_thumb = measured(Size::new(200.0, 30.0), Size::new(20.0, 20.0));
        assert_eq!(small_thumb.touch_size(&config), Size::new(40.0, 40.0));
        assert_eq!(small_thumb.touch_overflow(&config), Size::new(20.0, 10.0));

        let large_thumb = measured(Size::new(200.0, 60.0), Size::new(56.0, 56.0));
        assert_eq!(large_thumb.touch_size(&config), Size::new(56.0, 56.0));
        assert_eq!(large_thumb.touch_overflow(&config), Size::ZERO);
    }
}
