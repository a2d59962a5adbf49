use nalgebra::Vector2;

/// Euclidean distance `|p - q|`.
#[inline]
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    (p - q).norm()
}

/// z-component of `(b - a) × (c - a)`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Squared perpendicular distance from `c` to the infinite line through `a` and `b`.
///
/// If `a == b` the line collapses to a point and the squared distance to `a` is returned.
pub fn sq_distance_to_line(c: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return (c - a).norm_squared();
    }
    let k = cross(a, b, c);
    k * k / len2
}
