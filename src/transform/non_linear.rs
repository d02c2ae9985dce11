//! Depth-dependent distortion.

use crate::{
    foundation::core::Point,
    model::point::{PointArena, PointId},
};

/// Scale each point's x/y offset from `pivot` by `1 + z * factor`, a cheap stand-in
/// for perspective foreshortening. `z` is left alone.
pub fn zoom_distort(points: &mut PointArena, ids: &[PointId], pivot: Point, factor: f64) {
    for &id in ids {
        let p = &mut points[id];
        let zoom = 1.0 + p.z * factor;
        p.x = pivot.x + (p.x - pivot.x) * zoom;
        p.y = pivot.y + (p.y - pivot.y) * zoom;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/non_linear.rs"]
mod tests;
