use super::Vector2;

/// Returns the Euclidean distance between `(ax, ay)` and `(bx, by)`.
///
/// Coordinates are widened to `f64` before squaring so that the
/// subtraction and squares do not lose precision at `f32` scale.
#[must_use]
pub fn point_dist(ax: f32, ay: f32, bx: f32, by: f32) -> f64 {
    let d = Vector2::new(f64::from(ax) - f64::from(bx), f64::from(ay) - f64::from(by));
    d.norm()
}

/// Projects `p` onto the infinite line through `a` and `b`.
///
/// Returns the parameter `t` such that `a + t * (b - a)` is the closest point
/// on the line, or `None` when `a` and `b` coincide exactly.
#[must_use]
pub fn project_onto_line(p: &Vector2, a: &Vector2, b: &Vector2) -> Option<f64> {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq == 0.0 {
        return None;
    }
    Some((p - a).dot(&d) / len_sq)
}
