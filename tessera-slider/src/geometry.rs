//! Floating point geometry primitives used by the slider core.
//!
//! Coordinates follow the usual screen convention:
//! - Origin (0, 0) at the top-left corner of the slider container
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! Drag deltas are continuous, so unlike the renderer's integer pixel types
//! everything here is `f32`.

/// A 2D point in container space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate.
    pub x: f32,
    /// The y-coordinate.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D size.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

impl Size {
    /// A zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the component-wise maximum of two sizes.
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns `true` when both dimensions are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned rectangle with a top-left position and dimensions.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The x-coordinate of the top-left corner
    pub x: f32,
    /// The y-coordinate of the top-left corner
    pub y: f32,
    /// The width of the rectangle
    pub width: f32,
    /// The height of the rectangle
    pub height: f32,
}

impl Rect {
    /// A zero rectangle (0×0 at the origin).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle from position and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle of `size` centered on `center`.
    pub fn centered(center: Point, size: Size) -> Self {
        Self {
            x: center.x - size.width / 2.0,
            y: center.y - size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    /// The right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle.
    ///
    /// Edges are inclusive on all four sides, so a touch landing exactly on
    /// the border of a thumb's touch target still counts as a hit.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_slider::geometry::{Point, Rect};
    ///
    /// let rect = Rect::new(10.0, 10.0, 40.0, 40.0);
    /// assert!(rect.contains(Point::new(10.0, 50.0)));
    /// assert!(!rect.contains(Point::new(50.5, 20.0)));
    /// ```
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Horizontal distance from `x` to the nearest vertical edge.
    ///
    /// Returns `0.0` when `x` lies within the rectangle's horizontal span.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_slider::geometry::Rect;
    ///
    /// let rect = Rect::new(10.0, 0.0, 20.0, 40.0);
    /// assert_eq!(rect.horizontal_distance(4.0), 6.0);
    /// assert_eq!(rect.horizontal_distance(15.0), 0.0);
    /// assert_eq!(rect.horizontal_distance(35.0), 5.0);
    /// ```
    pub fn horizontal_distance(&self, x: f32) -> f32 {
        if x < self.x {
            self.x - x
        } else if x > self.right() {
            x - self.right()
        } else {
            0.0
        }
    }
}
