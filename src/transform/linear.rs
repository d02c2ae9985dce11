//! Translations: direct moves, weighted multi-target blends and per-point weighted shifts.

use crate::{
    foundation::core::Vec3,
    model::point::{PointArena, PointId, Weight},
};

/// Translate `ids` by `target - pivot`.
pub fn move_to(points: &mut PointArena, ids: &[PointId], pivot: Vec3, target: Vec3) {
    translate(points, ids, target - pivot);
}

/// Translate `ids` by `amount * factor`.
pub fn move_by(points: &mut PointArena, ids: &[PointId], amount: Vec3, factor: f64) {
    translate(points, ids, amount * factor);
}

/// Translate `ids` by each target scaled by its weight over the total weight.
///
/// A zero or non-finite total leaves the points untouched and returns `false`; the
/// weights are caller-supplied and must sum to a positive number.
pub fn move_weighted(points: &mut PointArena, ids: &[PointId], targets: &[(Vec3, f64)]) -> bool {
    let total: f64 = targets.iter().map(|&(_, w)| w).sum();
    if total == 0.0 || !total.is_finite() {
        tracing::debug!(total, "skipping weighted move with degenerate weight total");
        return false;
    }
    for &(target, w) in targets {
        move_by(points, ids, target, w / total);
    }
    true
}

/// Offset x by `amount` scaled by each point's `weight` (1 when unset).
pub fn shift_x(points: &mut PointArena, ids: &[PointId], amount: f64, weight: Weight) {
    for &id in ids {
        let p = &mut points[id];
        p.x += amount * p.weight(weight);
    }
}

/// Offset y by `amount` scaled by each point's `weight` (1 when unset).
pub fn shift_y(points: &mut PointArena, ids: &[PointId], amount: f64, weight: Weight) {
    for &id in ids {
        let p = &mut points[id];
        p.y += amount * p.weight(weight);
    }
}

fn translate(points: &mut PointArena, ids: &[PointId], delta: Vec3) {
    for &id in ids {
        let p = &mut points[id];
        p.x += delta.x;
        p.y += delta.y;
        p.z += delta.z;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/linear.rs"]
mod tests;
