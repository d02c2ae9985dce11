//! Axis rotations about a pivot.
//!
//! Each plane rotation reads the coordinates produced by the previous one, so the
//! axis order is part of the contract.

use crate::{
    foundation::{core::Vec3, math::rotate_polar},
    model::point::{PointArena, PointId},
};

/// Rotate about `pivot` by `angx` in the Y-Z plane, then `angy` in the X-Z plane.
pub fn rotate_xy(points: &mut PointArena, ids: &[PointId], pivot: Vec3, angx: f64, angy: f64) {
    for &id in ids {
        let p = &mut points[id];
        let (mut x, mut y, mut z) = (p.x - pivot.x, p.y - pivot.y, p.z - pivot.z);

        (y, z) = rotate_polar(y, z, angx);
        (x, z) = rotate_polar(x, z, angy);

        p.x = x + pivot.x;
        p.y = y + pivot.y;
        p.z = z + pivot.z;
    }
}

/// Rotate about `pivot` by `angz` in the X-Y plane, then `angx` in Y-Z, then `angy` in X-Z.
pub fn rotate_zxy(
    points: &mut PointArena,
    ids: &[PointId],
    pivot: Vec3,
    angz: f64,
    angx: f64,
    angy: f64,
) {
    for &id in ids {
        let p = &mut points[id];
        let (mut x, mut y, mut z) = (p.x - pivot.x, p.y - pivot.y, p.z - pivot.z);

        (x, y) = rotate_polar(x, y, angz);
        (y, z) = rotate_polar(y, z, angx);
        (x, z) = rotate_polar(x, z, angy);

        p.x = x + pivot.x;
        p.y = y + pivot.y;
        p.z = z + pivot.z;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotate.rs"]
mod tests;
