/// Rotate the planar vector `(a, b)` by `angle` radians through its polar form.
///
/// Goes through polar form (`atan2`, then `cos`/`sin`), not a rotation matrix; recorded
/// pose snapshots depend on its exact rounding.
#[inline]
pub(crate) fn rotate_polar(a: f64, b: f64, angle: f64) -> (f64, f64) {
    let d = (a * a + b * b).sqrt();
    let theta = b.atan2(a) + angle;
    (d * theta.cos(), d * theta.sin())
}

/// Unit vector perpendicular (counter-clockwise in screen space) to `(dx, dy)`.
#[inline]
pub(crate) fn perpendicular(dx: f64, dy: f64) -> (f64, f64) {
    let a = dy.atan2(dx) + std::f64::consts::FRAC_PI_2;
    (a.cos(), a.sin())
}

pub(crate) const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
