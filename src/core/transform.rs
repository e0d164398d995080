use serde::{Deserialize, Serialize};

/// Point in either logical or device space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shifts the point by a pixel offset (unit scale transform).
    #[must_use]
    pub fn nudge(self, dx: f64, dy: f64) -> Self {
        AxisTransform::translation(dx, dy).apply(self)
    }

    /// Rounds both coordinates to the nearest integer, ties to even.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(self.x.round_ties_even(), self.y.round_ties_even())
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Per-axis scale and offset: `(x*sx + bx, y*sy + by)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTransform {
    pub scale: Point,
    pub offset: Point,
}

impl AxisTransform {
    #[must_use]
    pub const fn new(scale: Point, offset: Point) -> Self {
        Self { scale, offset }
    }

    #[must_use]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self::new(Point::new(1.0, 1.0), Point::new(dx, dy))
    }

    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            point.x * self.scale.x + self.offset.x,
            point.y * self.scale.y + self.offset.y,
        )
    }
}

/// Device-space plot rectangle.
///
/// `size.y` is negative for the usual chart orientation: logical `y = 0` sits on
/// the bottom edge (`origin.y`) and `y = 1` on the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub size: Point,
    pub origin: Point,
}

impl PlotArea {
    #[must_use]
    pub const fn new(size: Point, origin: Point) -> Self {
        Self { size, origin }
    }

    #[must_use]
    pub fn transform(self) -> AxisTransform {
        AxisTransform::new(self.size, self.origin)
    }

    /// Maps a normalized `(0..1, 0..1)` point into device space.
    #[must_use]
    pub fn to_device(self, normalized: Point) -> Point {
        self.transform().apply(normalized)
    }

    /// Same as [`PlotArea::to_device`] but snapped to whole pixels.
    #[must_use]
    pub fn to_device_rounded(self, normalized: Point) -> Point {
        self.to_device(normalized).rounded()
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.size.x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        -self.size.y
    }
}
