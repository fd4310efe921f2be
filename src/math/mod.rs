pub mod distance_2d;
pub mod intersect_2d;

/// 2D vector type used for widened (f64) intermediate arithmetic.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global (strict) tolerance for floating-point comparisons.
pub const DELTA: f32 = 0.000_001;

/// Relaxed tolerance for comparisons that accumulate several rounding steps,
/// such as segment membership via a sum of two distances.
pub const EASY_DELTA: f32 = 100.0 * DELTA;

/// Returns `true` when `|a - b| < delta`.
///
/// The comparison is strict: a difference exactly equal to `delta` is not
/// within tolerance.
#[must_use]
#[inline]
pub fn within_delta(a: f32, b: f32, delta: f32) -> bool {
    (a - b).abs() < delta
}

/// [`within_delta`] with [`DELTA`].
#[must_use]
#[inline]
pub fn within_global_delta(a: f32, b: f32) -> bool {
    within_delta(a, b, DELTA)
}

/// [`within_delta`] with [`EASY_DELTA`].
#[must_use]
#[inline]
pub fn within_easy_delta(a: f32, b: f32) -> bool {
    within_delta(a, b, EASY_DELTA)
}
