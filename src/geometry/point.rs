use std::fmt;

use tracing::debug;

use crate::error::{PointError, Result};
use crate::math::distance_2d::point_dist;
use crate::math::{within_global_delta, Vector2};

/// A point in 2D space.
///
/// Equality predicates such as [`Point::touching`] are tolerance-based; the
/// derived `PartialEq` compares coordinates exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The point `(0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns `true` if both points have the same x value within [`DELTA`](crate::math::DELTA).
    #[must_use]
    pub fn same_x(&self, other: &Self) -> bool {
        within_global_delta(self.x, other.x)
    }

    /// Returns `true` if both points have the same y value within [`DELTA`](crate::math::DELTA).
    #[must_use]
    pub fn same_y(&self, other: &Self) -> bool {
        within_global_delta(self.y, other.y)
    }

    /// Returns `true` if the points coincide on both axes.
    ///
    /// This is a per-axis test, not a radial one: two points can touch while
    /// lying slightly more than `DELTA` apart diagonally.
    #[must_use]
    pub fn touching(&self, other: &Self) -> bool {
        self.same_x(other) && self.same_y(other)
    }

    /// Signed separation along x: `self.x - other.x`.
    #[must_use]
    pub fn x_distance(&self, other: &Self) -> f32 {
        self.x - other.x
    }

    /// Signed separation along y: `self.y - other.y`.
    #[must_use]
    pub fn y_distance(&self, other: &Self) -> f32 {
        self.y - other.y
    }

    /// Euclidean distance, computed in `f64` and narrowed.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn distance(&self, other: &Self) -> f32 {
        point_dist(self.x, self.y, other.x, other.y) as f32
    }

    pub(crate) fn to_wide(self) -> Vector2 {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn from_wide(v: &Vector2) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Componentwise minimum and maximum over a point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Computes the bounds of `points`.
    ///
    /// # Errors
    ///
    /// Returns [`PointError::EmptyInput`] if `points` is empty.
    pub fn of(points: &[Point]) -> Result<Self> {
        let Some((first, rest)) = points.split_first() else {
            debug!("bounds requested over an empty point sequence");
            return Err(PointError::EmptyInput.into());
        };
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in rest {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Ok(bounds)
    }

    /// The `(min_x, min_y)` corner.
    #[must_use]
    pub fn min_point(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// The `(max_x, max_y)` corner.
    #[must_use]
    pub fn max_point(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: &Point) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }
}
