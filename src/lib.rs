//! Epsilon-tolerant 2D collision predicates.
//!
//! Points, segments, circles, general polygons and axis-aligned rectangles,
//! with containment and intersection tests that share the tolerance scheme
//! in [`math`].

pub mod error;
pub mod geometry;
pub mod math;

#[cfg(test)]
mod scenarios;

pub use error::{CollideError, Result};
pub use geometry::{Bounds, Circle, GeneralPolygon, LineSegment, Point, Polygon, Rectangle};
