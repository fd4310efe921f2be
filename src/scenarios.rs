//! End-to-end checks across the shape types.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use tracing_subscriber::EnvFilter;

use crate::error::{CollideError, PolygonError};
use crate::{Circle, GeneralPolygon, LineSegment, Point, Polygon, Rectangle};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

#[test]
fn circle_contains_near_boundary() {
    init_tracing();
    let c = Circle::new(1.0, 1.0, 5.0);
    assert!(c.contains_point(&pt(1.0, 5.999)));
    assert!(!c.contains_point(&pt(1.0, 6.001)));
}

#[test]
fn circle_against_long_segment() {
    init_tracing();
    let c = Circle::new(0.0, 0.0, 10.0);
    assert!(!c.intersects_segment(&LineSegment::new(pt(1000.0, 50.0), pt(10.0001, 0.0))));
    assert!(c.intersects_segment(&LineSegment::new(pt(1000.0, 50.0), pt(9.999, 0.0))));
}

#[test]
fn diagonal_segments_cross() {
    init_tracing();
    let a = LineSegment::new(pt(0.0, 0.0), pt(10.0, 10.0));
    let b = LineSegment::new(pt(0.0, 1.0), pt(1.0, 0.0));
    let at = a.intersects(&b).unwrap();
    assert_relative_eq!(at.x, 0.5, epsilon = 1e-6);
    assert_relative_eq!(at.y, 0.5, epsilon = 1e-6);
}

#[test]
fn self_intersecting_quadrilateral() {
    init_tracing();
    let err = GeneralPolygon::new(vec![pt(0.0, 1.0), pt(1.0, 1.0), pt(1.0, 2.0), pt(0.0, 0.0)])
        .unwrap_err();
    assert_eq!(
        err,
        CollideError::Polygon(PolygonError::SelfIntersection {
            first: LineSegment::new(pt(0.0, 1.0), pt(1.0, 1.0)),
            second: LineSegment::new(pt(1.0, 2.0), pt(0.0, 0.0)),
            at: pt(0.5, 1.0),
        })
    );
}

#[test]
fn rectangle_from_opposite_corners_either_order() {
    init_tracing();
    let expected = [pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0), pt(1.0, 0.0)];
    let forward = Rectangle::from_opposite_corners(&[pt(0.0, 0.0), pt(1.0, 1.0)]).unwrap();
    let backward = Rectangle::from_opposite_corners(&[pt(1.0, 1.0), pt(0.0, 0.0)]).unwrap();
    assert_eq!(forward.vertices(), &expected);
    assert_eq!(backward.vertices(), &expected);
}

#[test]
fn rectangle_containment_and_edge_segment() {
    init_tracing();
    let r = Rectangle::from_four_points(&[pt(1.0, 1.0), pt(1.0, 4.0), pt(4.0, 4.0), pt(4.0, 1.0)])
        .unwrap();
    assert!(r.contains_point(&pt(2.0, 2.0)));
    assert!(!r.contains_point(&pt(0.0, 2.0)));

    let hits = r.intersects_segment(&LineSegment::new(pt(1.0, 1.0), pt(4.0, 1.0)));
    assert_eq!(hits, vec![pt(1.0, 1.0), pt(4.0, 1.0)]);
}

#[test]
fn rectangle_is_a_valid_general_polygon() {
    init_tracing();
    let r = Rectangle::from_min_max(-2.0, 3.0, 0.5, 7.5).unwrap();
    let p = GeneralPolygon::new(r.vertices().to_vec()).unwrap();
    assert_eq!(p.edges(), r.edges());
    let shapes: [&dyn Polygon; 2] = [&r, &p];
    for shape in shapes {
        assert!(shape.validate().is_ok());
    }
}

#[test]
fn circle_overlaps_rectangle_edge() {
    init_tracing();
    let r = Rectangle::from_min_max(0.0, 4.0, 0.0, 4.0).unwrap();
    let c = Circle::new(5.0, 2.0, 1.5);
    assert!(r.edges().iter().any(|e| c.intersects_segment(e)));
    let far = Circle::new(9.0, 2.0, 1.5);
    assert!(!r.edges().iter().any(|e| far.intersects_segment(e)));
}

#[test]
fn shapes_are_shareable_across_threads() {
    init_tracing();
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Point>();
    assert_send_sync::<LineSegment>();
    assert_send_sync::<Circle>();
    assert_send_sync::<GeneralPolygon>();
    assert_send_sync::<Rectangle>();
}
