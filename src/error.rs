use thiserror::Error;

use crate::geometry::{LineSegment, Point};

/// Top-level error type for the collision kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollideError {
    #[error(transparent)]
    Point(#[from] PointError),

    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error(transparent)]
    Rectangle(#[from] RectangleError),
}

/// Errors raised by point-sequence helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointError {
    #[error("cannot compute min and max over an empty point sequence")]
    EmptyInput,
}

/// Errors raised while validating a general polygon.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonError {
    #[error("require at least 3 points, the sequence of points provided was of length {count}")]
    Dimension { count: usize },

    #[error("polygon edges intersect: edge {first} and edge {second} intersect at point {at}")]
    SelfIntersection {
        first: LineSegment,
        second: LineSegment,
        at: Point,
    },
}

/// Errors raised while building or validating an axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RectangleError {
    #[error("four corners required to build this rectangle, got {count} points")]
    Dimension { count: usize },

    #[error("building a rectangle from opposite corners requires exactly two points, got {count}")]
    OppositeCornersDimension { count: usize },

    #[error("both corners share the same x value: {x}")]
    OppositeCornersSameX { x: f32 },

    #[error("both corners share the same y value: {y}")]
    OppositeCornersSameY { y: f32 },

    #[error("two of the supplied corners are the same point: {a} and {b}")]
    PointsTouching { a: Point, b: Point },

    #[error("min point {min} and max point {max} share an x or y value")]
    SharedMinMax { min: Point, max: Point },

    #[error("point {point} shares no value with min {min} or max {max}")]
    PointNotOnMinOrMax { point: Point, min: Point, max: Point },

    /// Not produced by a vertex set that passes the distinctness and
    /// min/max membership checks; [`Polygon::validate`](crate::Polygon::validate)
    /// keeps it as a final guard.
    #[error("each min and max x and y value must be used by exactly two of the vertices {vertices:?}")]
    TwoMinTwoMaxRequired { vertices: [Point; 4] },

    #[error("corner {vertex} matched {hits} input vertices, expected exactly one")]
    VertexCount { vertex: Point, hits: usize },
}

/// Convenience type alias for results using [`CollideError`].
pub type Result<T> = std::result::Result<T, CollideError>;
