use super::{within_global_delta, Vector2};

/// Parametric 2D segment-segment solve.
///
/// Given segments `a0 -> a1` and `b0 -> b1`, returns `(ua, ub)` such that
/// `a0 + ua * (a1 - a0) == b0 + ub * (b1 - b0)`. Returns `None` when the
/// denominator is within the global tolerance of zero, i.e. the segments
/// are parallel or collinear. The caller decides whether the parameters
/// fall inside the bounded segments.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn segment_segment_params(
    a0: &Vector2,
    a1: &Vector2,
    b0: &Vector2,
    b1: &Vector2,
) -> Option<(f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    // (y4-y3)(x2-x1) - (x4-x3)(y2-y1)
    let denominator = da.perp(&db);
    if within_global_delta(denominator as f32, 0.0) {
        return None;
    }

    let w = a0 - b0;
    let ua = db.perp(&w) / denominator;
    let ub = da.perp(&w) / denominator;
    Some((ua, ub))
}

/// Linear interpolation: `origin + t * (end - origin)`.
#[must_use]
pub fn lerp(origin: &Vector2, end: &Vector2, t: f64) -> Vector2 {
    origin + (end - origin) * t
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn perpendicular_crossing() {
        let (ua, ub) = segment_segment_params(
            &Vector2::new(0.0, 0.0),
            &Vector2::new(2.0, 0.0),
            &Vector2::new(1.0, -1.0),
            &Vector2::new(1.0, 1.0),
        )
        .unwrap();
        assert!((ua - 0.5).abs() < TOL);
        assert!((ub - 0.5).abs() < TOL);
    }

    #[test]
    fn params_outside_unit_interval() {
        let (ua, ub) = segment_segment_params(
            &Vector2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Vector2::new(3.0, -1.0),
            &Vector2::new(3.0, 1.0),
        )
        .unwrap();
        assert!((ua - 3.0).abs() < TOL);
        assert!((ub - 0.5).abs() < TOL);
    }

    #[test]
    fn parallel_returns_none() {
        assert!(segment_segment_params(
            &Vector2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Vector2::new(0.0, 1.0),
            &Vector2::new(1.0, 1.0),
        )
        .is_none());
    }

    #[test]
    fn zero_length_is_parallel() {
        let p = Vector2::new(2.0, 2.0);
        assert!(segment_segment_params(&p, &p, &Vector2::new(0.0, 0.0), &Vector2::new(4.0, 4.0)).is_none());
    }

    #[test]
    fn lerp_midpoint() {
        let p = lerp(&Vector2::new(1.0, 2.0), &Vector2::new(5.0, 8.0), 0.5);
        assert!((p.x - 3.0).abs() < TOL);
        assert!((p.y - 5.0).abs() < TOL);
    }
}
