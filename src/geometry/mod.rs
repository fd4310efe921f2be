pub mod circle;
pub mod point;
pub mod polygon;
pub mod segment;

pub use circle::Circle;
pub use point::{Bounds, Point};
pub use polygon::{GeneralPolygon, Polygon, Rectangle};
pub use segment::LineSegment;
