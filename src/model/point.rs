use std::ops::{Index, IndexMut};

use crate::foundation::core::Vec3;

/// Stable handle to a point owned by a [`PointArena`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PointId(pub u32);

/// Per-point scalar used by the weighted shift operators. Missing weights read as `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weight {
    /// Whole-body lean.
    Shift,
    /// Shoulder shrug.
    Shrug,
    /// Nose crinkle.
    Crinkle,
}

/// A posable 3D point with an immutable rest snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    rest: Vec3,
    /// Bone-segment length for chain operators.
    pub d: f64,
    pub shift: Option<f64>,
    pub shrug: Option<f64>,
    pub crinkle: Option<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            rest: Vec3::new(x, y, z),
            d: 0.0,
            shift: None,
            shrug: None,
            crinkle: None,
        }
    }

    pub fn at(p: Vec3) -> Self {
        Self::new(p.x, p.y, p.z)
    }

    pub fn with_d(mut self, d: f64) -> Self {
        self.d = d;
        self
    }

    pub fn with_shift(mut self, w: f64) -> Self {
        self.shift = Some(w);
        self
    }

    pub fn with_shrug(mut self, w: f64) -> Self {
        self.shrug = Some(w);
        self
    }

    pub fn with_crinkle(mut self, w: f64) -> Self {
        self.crinkle = Some(w);
        self
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn set_position(&mut self, p: Vec3) {
        self.x = p.x;
        self.y = p.y;
        self.z = p.z;
    }

    /// Rest position captured when the point was admitted to its model.
    pub fn rest(&self) -> Vec3 {
        self.rest
    }

    pub fn weight(&self, w: Weight) -> f64 {
        match w {
            Weight::Shift => self.shift,
            Weight::Shrug => self.shrug,
            Weight::Crinkle => self.crinkle,
        }
        .unwrap_or(1.0)
    }

    fn reset(&mut self) {
        self.set_position(self.rest);
    }
}

/// Owner of every point in a model. Shapes and skeleton anchors hold [`PointId`]s.
#[derive(Clone, Debug, Default)]
pub struct PointArena {
    points: Vec<Point>,
}

impl PointArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `p`, snapshotting its current coordinates as the rest pose.
    pub fn add(&mut self, mut p: Point) -> PointId {
        p.rest = p.position();
        let id = PointId(self.points.len() as u32);
        self.points.push(p);
        id
    }

    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.0 as usize)
    }

    pub fn position(&self, id: PointId) -> Vec3 {
        self[id].position()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    pub(crate) fn reset_all(&mut self) {
        self.points.iter_mut().for_each(Point::reset);
    }

    pub(crate) fn translate_xy(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }
}

impl Index<PointId> for PointArena {
    type Output = Point;

    fn index(&self, id: PointId) -> &Point {
        &self.points[id.0 as usize]
    }
}

impl IndexMut<PointId> for PointArena {
    fn index_mut(&mut self, id: PointId) -> &mut Point {
        &mut self.points[id.0 as usize]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/point.rs"]
mod tests;
