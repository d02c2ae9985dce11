use crate::{
    animation::channels::ChannelSet,
    foundation::core::{Rgba8, Vec3},
    model::point::{PointArena, PointId},
    render::graphics::Graphics,
};

/// Creation-order identifier; the final tie-break of paint order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ShapeId(pub u32);

/// Short tapered overlay that hides the seam between two adjacent capsules.
///
/// Drawn right after its owning shape, in the owner's fill colour.
#[derive(Clone, Debug, PartialEq)]
pub struct Smudge {
    pub points: [PointId; 2],
    pub size: f64,
    pub size2: Option<f64>,
    /// Length as a multiple of the owner's border; `2` when unset.
    pub scale: Option<f64>,
}

impl Smudge {
    pub fn new(from: PointId, toward: PointId, size: f64) -> Self {
        Self {
            points: [from, toward],
            size,
            size2: None,
            scale: None,
        }
    }

    pub fn size2(mut self, size2: f64) -> Self {
        self.size2 = Some(size2);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// Colours handed to a shape's draw operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureStyle {
    pub fill: Rgba8,
    pub outline: Rgba8,
    pub pupil: Rgba8,
}

/// Custom draw behaviour for shapes that are not plain capsules (eyes, mouth).
///
/// Feature shapes still take part in posing and depth sorting like any other shape.
pub trait Feature: std::fmt::Debug {
    fn draw(
        &self,
        shape: &Shape,
        points: &PointArena,
        g: &mut Graphics<'_>,
        channels: &ChannelSet,
        style: &FeatureStyle,
    );
}

#[derive(Debug, Default)]
pub enum ShapeKind {
    #[default]
    Capsule,
    Feature(Box<dyn Feature>),
}

/// An ordered run of points rendered as a capsule, polygon or custom feature.
#[derive(Debug)]
pub struct Shape {
    pub points: Vec<PointId>,
    /// Width at the first point (or everywhere when `size2` is unset).
    pub size: f64,
    /// Width at the last point.
    pub size2: Option<f64>,
    pub border: f64,
    pub layer: i32,
    /// Palette index.
    pub color: usize,
    pub smudges: Vec<Smudge>,
    pub(crate) id: ShapeId,
    pub(crate) center: Vec3,
    pub(crate) kind: ShapeKind,
}

impl Shape {
    pub fn new(points: Vec<PointId>, size: f64, border: f64) -> Self {
        Self {
            points,
            size,
            size2: None,
            border,
            layer: 0,
            color: 0,
            smudges: Vec::new(),
            id: ShapeId(0),
            center: Vec3::ZERO,
            kind: ShapeKind::Capsule,
        }
    }

    /// A point-anchored shape with no capsule body, for custom features.
    pub fn anchor(points: Vec<PointId>) -> Self {
        Self::new(points, 0.0, 0.0)
    }

    pub fn size2(mut self, size2: f64) -> Self {
        self.size2 = Some(size2);
        self
    }

    pub fn layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    pub fn color(mut self, color: usize) -> Self {
        self.color = color;
        self
    }

    pub fn smudge(mut self, smudge: Smudge) -> Self {
        self.smudges.push(smudge);
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Centroid as of the last [`crate::model::store::Model::draw`].
    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn is_capsule(&self) -> bool {
        matches!(self.kind, ShapeKind::Capsule)
    }

    pub(crate) fn update_center(&mut self, points: &PointArena) {
        if self.points.is_empty() {
            self.center = Vec3::ZERO;
            return;
        }
        let sum = self
            .points
            .iter()
            .fold(Vec3::ZERO, |acc, &id| acc + points.position(id));
        let n = self.points.len() as f64;
        self.center = Vec3::new(sum.x / n, sum.y / n, sum.z / n);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/shape.rs"]
mod tests;
