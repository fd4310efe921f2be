mod general;
mod rectangle;

pub use general::{find_self_intersection, GeneralPolygon};
pub use rectangle::Rectangle;

use crate::error::Result;

use super::{LineSegment, Point};

/// Capability shared by closed polygonal shapes.
///
/// Implementors own their vertices; edges are derived from them with
/// [`populate_edges`].
pub trait Polygon {
    /// Vertices in edge order.
    fn vertices(&self) -> &[Point];

    /// Edges in vertex order, edge `i` joining vertex `i` to vertex `i + 1`
    /// and the last edge closing the loop.
    fn edges(&self) -> &[LineSegment];

    /// Checks the shape's invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant of the concrete shape.
    fn validate(&self) -> Result<()>;
}

/// Builds the closed edge loop for `vertices`.
///
/// Produces exactly `n` edges for `n` vertices; an empty input produces no
/// edges.
#[must_use]
pub fn populate_edges(vertices: &[Point]) -> Vec<LineSegment> {
    let n = vertices.len();
    (0..n)
        .map(|i| LineSegment::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_close_the_loop() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 10.0);
        let c = Point::new(10.0, 10.0);
        let d = Point::new(10.0, 0.0);
        let edges = populate_edges(&[a, b, c, d]);
        assert_eq!(
            edges,
            vec![
                LineSegment::new(a, b),
                LineSegment::new(b, c),
                LineSegment::new(c, d),
                LineSegment::new(d, a),
            ]
        );
    }

    #[test]
    fn edge_count_matches_vertex_count() {
        assert!(populate_edges(&[]).is_empty());
        let single = populate_edges(&[Point::new(1.0, 1.0)]);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].start, single[0].end);
        assert_eq!(populate_edges(&[Point::origin(), Point::new(1.0, 0.0)]).len(), 2);
    }

    #[test]
    fn repopulating_is_idempotent() {
        let vertices = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(2.0, 4.0),
            Point::new(-1.0, 2.0),
        ];
        assert_eq!(populate_edges(&vertices), populate_edges(&vertices));
    }
}
