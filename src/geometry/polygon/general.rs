use tracing::debug;

use crate::error::{PolygonError, Result};
use crate::geometry::{LineSegment, Point};

use super::{populate_edges, Polygon};

/// A simple polygon given by an ordered vertex loop.
///
/// Construction guarantees at least 3 vertices and that no two non-adjacent
/// edges intersect. Three vertices always form a valid polygon, even when
/// collinear.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralPolygon {
    vertices: Vec<Point>,
    edges: Vec<LineSegment>,
}

impl GeneralPolygon {
    /// Builds and validates a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::Dimension`] for fewer than 3 vertices and
    /// [`PolygonError::SelfIntersection`] for the first pair of non-adjacent
    /// edges found to intersect.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        let edges = populate_edges(&vertices);
        let polygon = Self { vertices, edges };
        polygon.validate()?;
        Ok(polygon)
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false` for a constructed polygon.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First pair of crossing non-adjacent edges and where they meet, if any.
    ///
    /// `None` for every polygon returned by [`GeneralPolygon::new`].
    #[must_use]
    pub fn self_intersection(&self) -> Option<(LineSegment, LineSegment, Point)> {
        find_self_intersection(&self.edges)
    }
}

impl Polygon for GeneralPolygon {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn edges(&self) -> &[LineSegment] {
        &self.edges
    }

    fn validate(&self) -> Result<()> {
        let count = self.vertices.len();
        if count < 3 {
            debug!(count, "polygon rejected: too few vertices");
            return Err(PolygonError::Dimension { count }.into());
        }
        if let Some((first, second, at)) = find_self_intersection(&self.edges) {
            debug!(%first, %second, %at, "polygon rejected: self-intersection");
            return Err(PolygonError::SelfIntersection { first, second, at }.into());
        }
        Ok(())
    }
}

/// Scans a closed edge loop for the first pair of non-adjacent edges that
/// intersect.
///
/// Edge 0 is checked against edges `2..n-1` (edge `n-1` shares vertex 0),
/// then each edge `i >= 1` against edges `i+2..n`.
#[must_use]
pub fn find_self_intersection(edges: &[LineSegment]) -> Option<(LineSegment, LineSegment, Point)> {
    let n = edges.len();
    let first = edges.first()?;
    let head = edges
        .iter()
        .take(n.saturating_sub(1))
        .skip(2)
        .find_map(|other| first.intersects(other).map(|at| (*first, *other, at)));
    if head.is_some() {
        return head;
    }

    for (i, a) in edges.iter().enumerate().skip(1) {
        for b in edges.iter().skip(i + 2) {
            if let Some(at) = a.intersects(b) {
                return Some((*a, *b, at));
            }
        }
    }
    None
}
