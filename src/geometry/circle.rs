use crate::math::distance_2d::project_onto_line;
use crate::math::intersect_2d::lerp;
use crate::math::within_global_delta;

use super::{LineSegment, Point};

/// A circle in the XY plane.
///
/// The radius is always stored as a non-negative value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    centre: Point,
    radius: f32,
}

impl Circle {
    /// Creates a circle centred at `(x, y)`. A negative radius is replaced by
    /// its absolute value.
    #[must_use]
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self::from_point(Point::new(x, y), radius)
    }

    /// Creates a circle centred at `centre`. A negative radius is replaced by
    /// its absolute value.
    #[must_use]
    pub fn from_point(centre: Point, radius: f32) -> Self {
        Self {
            centre,
            radius: radius.abs(),
        }
    }

    /// Returns the centre of the circle.
    #[must_use]
    pub fn centre(&self) -> Point {
        self.centre
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the centre and radius together.
    #[must_use]
    pub fn centre_and_radius(&self) -> (Point, f32) {
        (self.centre, self.radius)
    }

    /// Returns `true` if `p` is inside the circle or on its boundary.
    #[must_use]
    pub fn contains_point(&self, p: &Point) -> bool {
        self.centre.distance(p) <= self.radius
    }

    /// Returns `true` if `p` lies on the circumference within [`DELTA`](crate::math::DELTA).
    #[must_use]
    pub fn circumference_touches(&self, p: &Point) -> bool {
        within_global_delta(self.centre.distance(p), self.radius)
    }

    /// Returns `true` if the two discs overlap or touch.
    ///
    /// No tolerance is applied, so externally tangent circles can be
    /// misclassified by rounding at exactly the sum of the radii.
    #[must_use]
    pub fn intersects_circle(&self, other: &Self) -> bool {
        self.centre.distance(&other.centre) <= self.radius + other.radius
    }

    /// Returns `true` if the segment touches or enters the disc.
    #[must_use]
    pub fn intersects_segment(&self, ls: &LineSegment) -> bool {
        if self.contains_point(&ls.start) || self.contains_point(&ls.end) {
            return true;
        }
        self.closest_point_hits(ls)
    }

    /// Checks the point of the infinite line through `ls` nearest the centre.
    /// Lying inside the disc is necessary; lying on the bounded segment is
    /// then sufficient.
    fn closest_point_hits(&self, ls: &LineSegment) -> bool {
        let start = ls.start.to_wide();
        let end = ls.end.to_wide();
        let Some(t) = project_onto_line(&self.centre.to_wide(), &start, &end) else {
            // Zero-length and its only point is already known to be outside.
            return false;
        };
        let closest = Point::from_wide(&lerp(&start, &end, t));
        if !self.contains_point(&closest) {
            return false;
        }
        ls.has_point(&closest)
    }
}
