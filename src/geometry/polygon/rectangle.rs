use tracing::debug;

use crate::error::{CollideError, RectangleError, Result};
use crate::geometry::{Bounds, LineSegment, Point};
use crate::math::within_global_delta;

use super::Polygon;

/// An axis-aligned rectangle.
///
/// Vertices are always stored in canonical order: A bottom-left
/// `(min_x, min_y)`, B top-left `(min_x, max_y)`, C top-right
/// `(max_x, max_y)`, D bottom-right `(max_x, min_y)`. Edges are A-B, B-C,
/// C-D, D-A. Every constructor returns either a valid rectangle or an error.
///
/// Use [`GeneralPolygon`](super::GeneralPolygon) for rotated rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    vertices: [Point; 4],
    edges: [LineSegment; 4],
}

impl Rectangle {
    /// Builds a rectangle from its four corners given in any order.
    ///
    /// # Errors
    ///
    /// - [`RectangleError::Dimension`] unless exactly 4 points are given.
    /// - [`RectangleError::PointsTouching`] if two points coincide.
    /// - [`RectangleError::SharedMinMax`] if all points lie on one vertical
    ///   or horizontal line.
    /// - [`RectangleError::VertexCount`] if a corner of the points' bounding
    ///   box does not match exactly one input point.
    pub fn from_four_points(points: &[Point]) -> Result<Self> {
        if points.len() != 4 {
            return Err(rejected(RectangleError::Dimension {
                count: points.len(),
            }));
        }
        check_distinct(points)?;

        let rect = Self::canonical(&Bounds::of(points)?);
        for vertex in rect.vertices {
            let hits = points.iter().filter(|p| vertex.touching(p)).count();
            if hits != 1 {
                return Err(rejected(RectangleError::VertexCount { vertex, hits }));
            }
        }

        rect.validate()?;
        Ok(rect)
    }

    /// Builds a rectangle from two opposite corners given in either order.
    ///
    /// # Errors
    ///
    /// - [`RectangleError::OppositeCornersDimension`] unless exactly 2 points
    ///   are given.
    /// - [`RectangleError::OppositeCornersSameX`] /
    ///   [`RectangleError::OppositeCornersSameY`] if the corners share an
    ///   axis value.
    pub fn from_opposite_corners(points: &[Point]) -> Result<Self> {
        let [f, g] = points else {
            return Err(rejected(RectangleError::OppositeCornersDimension {
                count: points.len(),
            }));
        };
        if f.same_x(g) {
            return Err(rejected(RectangleError::OppositeCornersSameX { x: f.x }));
        }
        if f.same_y(g) {
            return Err(rejected(RectangleError::OppositeCornersSameY { y: f.y }));
        }
        Ok(Self::canonical(&Bounds::of(points)?))
    }

    /// Builds a rectangle spanning `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// Swapped bounds are reordered.
    ///
    /// # Errors
    ///
    /// Returns [`RectangleError::SharedMinMax`] if the extent is zero on
    /// either axis.
    pub fn from_min_max(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Result<Self> {
        let bounds = Bounds {
            min_x: min_x.min(max_x),
            max_x: min_x.max(max_x),
            min_y: min_y.min(max_y),
            max_y: min_y.max(max_y),
        };
        if within_global_delta(bounds.min_x, bounds.max_x)
            || within_global_delta(bounds.min_y, bounds.max_y)
        {
            return Err(rejected(RectangleError::SharedMinMax {
                min: bounds.min_point(),
                max: bounds.max_point(),
            }));
        }
        Ok(Self::canonical(&bounds))
    }

    fn canonical(bounds: &Bounds) -> Self {
        Self::with_vertices([
            Point::new(bounds.min_x, bounds.min_y),
            Point::new(bounds.min_x, bounds.max_y),
            Point::new(bounds.max_x, bounds.max_y),
            Point::new(bounds.max_x, bounds.min_y),
        ])
    }

    fn with_vertices(vertices: [Point; 4]) -> Self {
        let [a, b, c, d] = vertices;
        Self {
            vertices,
            edges: [
                LineSegment::new(a, b),
                LineSegment::new(b, c),
                LineSegment::new(c, d),
                LineSegment::new(d, a),
            ],
        }
    }

    /// Extent of the rectangle, read from the canonical corners A and C.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let [a, _, c, _] = self.vertices;
        Bounds {
            min_x: a.x,
            max_x: c.x,
            min_y: a.y,
            max_y: c.y,
        }
    }

    /// Bottom-left corner.
    #[must_use]
    pub fn min_point(&self) -> Point {
        self.vertices[0]
    }

    /// Top-right corner.
    #[must_use]
    pub fn max_point(&self) -> Point {
        self.vertices[2]
    }

    /// Returns `true` if `p` is inside the rectangle or on its boundary.
    #[must_use]
    pub fn contains_point(&self, p: &Point) -> bool {
        self.bounds().contains(p)
    }

    /// Returns the distinct points where `ls` meets the rectangle's boundary,
    /// in edge order. An empty result means no intersection.
    ///
    /// A segment through a corner meets both adjacent edges there; points
    /// touching one already collected are dropped.
    #[must_use]
    pub fn intersects_segment(&self, ls: &LineSegment) -> Vec<Point> {
        let mut hits: Vec<Point> = Vec::with_capacity(2);
        for edge in &self.edges {
            let Some(p) = edge.intersects(ls) else {
                continue;
            };
            if !hits.iter().any(|h| h.touching(&p)) {
                hits.push(p);
            }
        }
        hits
    }
}

impl Polygon for Rectangle {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn edges(&self) -> &[LineSegment] {
        &self.edges
    }

    fn validate(&self) -> Result<()> {
        // A zero extent collapses canonical corners onto each other, so it
        // must be reported before the distinctness scan sees them.
        let bounds = Bounds::of(&self.vertices)?;
        let min = bounds.min_point();
        let max = bounds.max_point();
        if min.same_x(&max) || min.same_y(&max) {
            return Err(rejected(RectangleError::SharedMinMax { min, max }));
        }
        check_distinct(&self.vertices)?;

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (0, 0, 0, 0);
        for &point in &self.vertices {
            let x_found = if point.same_x(&min) {
                min_x += 1;
                true
            } else if point.same_x(&max) {
                max_x += 1;
                true
            } else {
                false
            };
            let y_found = if point.same_y(&min) {
                min_y += 1;
                true
            } else if point.same_y(&max) {
                max_y += 1;
                true
            } else {
                false
            };
            if !x_found || !y_found {
                return Err(rejected(RectangleError::PointNotOnMinOrMax { point, min, max }));
            }
        }

        // Unreachable for distinct vertices on min/max; kept as a guard.
        if [min_x, max_x, min_y, max_y] != [2; 4] {
            return Err(rejected(RectangleError::TwoMinTwoMaxRequired {
                vertices: self.vertices,
            }));
        }
        Ok(())
    }
}

fn check_distinct(points: &[Point]) -> Result<()> {
    for (i, a) in points.iter().enumerate() {
        if let Some(b) = points[i + 1..].iter().find(|b| a.touching(b)) {
            return Err(rejected(RectangleError::PointsTouching { a: *a, b: *b }));
        }
    }
    Ok(())
}

fn rejected(err: RectangleError) -> CollideError {
    debug!(%err, "rectangle rejected");
    err.into()
}
