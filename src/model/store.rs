use crate::model::{
    point::{Point, PointArena, PointId},
    shape::{Feature, Shape, ShapeId, ShapeKind},
};

/// Owns every point and shape of a figure; resets and reposes them each frame and
/// yields shapes in paint order.
#[derive(Debug, Default)]
pub struct Model {
    points: PointArena,
    shapes: Vec<Shape>,
    next_shape_id: u32,
    order: Vec<usize>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `p`; its current coordinates become its rest pose.
    pub fn add_point(&mut self, p: Point) -> PointId {
        self.points.add(p)
    }

    /// Admit a capsule-drawn shape.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        self.admit(shape, ShapeKind::Capsule)
    }

    /// Admit a shape that opts out of capsule drawing and renders through `feature`.
    pub fn add_feature_shape(&mut self, shape: Shape, feature: Box<dyn Feature>) -> ShapeId {
        self.admit(shape, ShapeKind::Feature(feature))
    }

    fn admit(&mut self, mut shape: Shape, kind: ShapeKind) -> ShapeId {
        self.next_shape_id += 1;
        let id = ShapeId(self.next_shape_id);
        shape.id = id;
        shape.kind = kind;
        self.shapes.push(shape);
        id
    }

    pub fn points(&self) -> &PointArena {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut PointArena {
        &mut self.points
    }

    /// Shapes in creation order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes
            .binary_search_by_key(&id, |s| s.id)
            .ok()
            .map(|i| &self.shapes[i])
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes
            .binary_search_by_key(&id, |s| s.id)
            .ok()
            .map(|i| &mut self.shapes[i])
    }

    /// Reset every point to rest, run `pose_fn`, then translate x/y by the offset.
    ///
    /// Posing always starts from rest, so repeated calls with the same inputs give
    /// identical coordinates and a bad frame cannot leak into the next one.
    pub fn pose<F>(&mut self, x: f64, y: f64, pose_fn: F)
    where
        F: FnOnce(&mut Self),
    {
        self.points.reset_all();
        pose_fn(self);
        self.points.translate_xy(x, y);
    }

    /// Recompute centroids and call `draw_shape` once per shape, ordered by
    /// `(layer, center.z, id)` ascending.
    pub fn draw<F>(&mut self, mut draw_shape: F)
    where
        F: FnMut(&Shape, &PointArena),
    {
        for s in &mut self.shapes {
            s.update_center(&self.points);
        }

        self.order.clear();
        self.order.extend(0..self.shapes.len());
        let shapes = &self.shapes;
        self.order.sort_by(|&a, &b| {
            let (a, b) = (&shapes[a], &shapes[b]);
            a.layer
                .cmp(&b.layer)
                .then_with(|| a.center.z.total_cmp(&b.center.z))
                .then_with(|| a.id.cmp(&b.id))
        });

        for &i in &self.order {
            draw_shape(&self.shapes[i], &self.points);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/store.rs"]
mod tests;
