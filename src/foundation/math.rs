use crate::foundation::core::Vec2;

/// Tolerance used when comparing angles and coordinates.
pub(crate) const EPSILON: f64 = 1e-9;

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Snap `deg` to the nearest multiple of `step`. A non-positive step disables snapping.
pub fn snap_degrees(deg: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return deg;
    }
    (deg / step).round() * step
}

/// Return `true` if `deg` is a multiple of `step` within [`EPSILON`].
pub(crate) fn is_multiple_of(deg: f64, step: f64) -> bool {
    let r = deg.rem_euclid(step);
    r < EPSILON || (step - r) < EPSILON
}

/// Component-wise product.
pub(crate) fn mul_components(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x * b.x, a.y * b.y)
}

/// Component-wise quotient; zero divisors yield zero instead of infinities.
pub(crate) fn div_components(a: Vec2, b: Vec2) -> Vec2 {
    fn div(n: f64, d: f64) -> f64 {
        if d == 0.0 { 0.0 } else { n / d }
    }
    Vec2::new(div(a.x, b.x), div(a.y, b.y))
}

/// Sine and cosine of `deg`, exact for quarter turns so axis-aligned results stay exact.
pub(crate) fn sin_cos_degrees(deg: f64) -> (f64, f64) {
    if is_multiple_of(deg, 90.0) {
        let quarter = (normalize_degrees(deg) / 90.0).round() as i64 % 4;
        return match quarter {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        };
    }
    deg.to_radians().sin_cos()
}

/// Rotate `point` around `pivot` by `deg` degrees.
pub fn rotate_point(point: Vec2, pivot: Vec2, deg: f64) -> Vec2 {
    if is_multiple_of(deg, 360.0) {
        return point;
    }
    let (sin, cos) = sin_cos_degrees(deg);
    let d = point - pivot;
    Vec2::new(
        pivot.x + d.x * cos - d.y * sin,
        pivot.y + d.x * sin + d.y * cos,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
