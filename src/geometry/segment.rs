use std::fmt;

use crate::math::intersect_2d::{lerp, segment_segment_params};
use crate::math::within_easy_delta;

use super::Point;

/// A bounded line segment from `start` to `end`.
///
/// A segment whose endpoints touch is a valid zero-length segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    /// Creates a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the same segment traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(&self.end)
    }

    /// Returns `true` for a vertical segment.
    ///
    /// Near-vertical segments within tolerance count as vertical; a
    /// zero-length segment does not.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.start.same_x(&self.end) && !self.start.same_y(&self.end)
    }

    /// Returns `true` for a horizontal segment.
    ///
    /// Near-horizontal segments within tolerance count as horizontal; a
    /// zero-length segment does not.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.start.same_y(&self.end) && !self.start.same_x(&self.end)
    }

    /// Returns `true` if `p` lies on the segment.
    ///
    /// Tests `|p - start| + |p - end| == length` within
    /// [`EASY_DELTA`](crate::math::EASY_DELTA), which checks collinearity
    /// and betweenness at once.
    #[must_use]
    pub fn has_point(&self, p: &Point) -> bool {
        let total = p.distance(&self.start) + p.distance(&self.end);
        within_easy_delta(total, self.length())
    }

    /// Finds an intersection point between this segment and `other`.
    ///
    /// Parallel and collinear segments are resolved by endpoint containment
    /// only, checking `other.start`, `other.end`, `self.start`, `self.end` in
    /// that order. Overlapping collinear segments that share no endpoint are
    /// therefore not reported, and the result is not symmetric in that branch.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> Option<Point> {
        let a0 = self.start.to_wide();
        let a1 = self.end.to_wide();
        let b0 = other.start.to_wide();
        let b1 = other.end.to_wide();

        let Some((ua, ub)) = segment_segment_params(&a0, &a1, &b0, &b1) else {
            return self.endpoint_contact(other);
        };

        let unit = 0.0..=1.0;
        if unit.contains(&ua) && unit.contains(&ub) {
            Some(Point::from_wide(&lerp(&a0, &a1, ua)))
        } else {
            None
        }
    }

    fn endpoint_contact(&self, other: &Self) -> Option<Point> {
        [
            (other.start, self),
            (other.end, self),
            (self.start, other),
            (self.end, other),
        ]
        .into_iter()
        .find(|(p, seg)| seg.has_point(p))
        .map(|(p, _)| p)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
