//! Thin drawing adapter over a 2D context.
//!
//! [`Graphics`] knows nothing about shapes: it turns line, curve, polygon and cone
//! requests into paths and hands them to a [`Canvas2d`] as stroke/fill calls.
//! Strokes use round caps and joins on every backend.

use crate::foundation::core::{BezPath, Point, Rgba8, Vec2};

/// Minimal stateless 2D context: stroke or fill one path in one colour.
pub trait Canvas2d {
    /// Stroke `path` with round caps and joins at `width` pixels.
    fn stroke(&mut self, path: &BezPath, width: f64, color: Rgba8);

    /// Fill `path` with the non-zero rule.
    fn fill(&mut self, path: &BezPath, color: Rgba8);
}

/// Primitive drawing operations on top of a borrowed [`Canvas2d`].
pub struct Graphics<'a> {
    canvas: &'a mut dyn Canvas2d,
}

impl std::fmt::Debug for Graphics<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graphics").finish_non_exhaustive()
    }
}

impl<'a> Graphics<'a> {
    pub fn new(canvas: &'a mut dyn Canvas2d) -> Self {
        Self { canvas }
    }

    /// Stroke a straight segment. A zero-length segment is nudged one unit along x so
    /// it still leaves a round dot.
    pub fn draw_line(&mut self, a: Point, b: Point, width: f64, color: Rgba8) {
        let end = if a == b { Point::new(b.x + 1.0, b.y) } else { b };
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(end);
        self.canvas.stroke(&path, width, color);
    }

    /// Stroke a quadratic curve from `a` to `b` bending toward `ctrl`.
    pub fn draw_curve(&mut self, a: Point, ctrl: Point, b: Point, width: f64, color: Rgba8) {
        let mut path = BezPath::new();
        path.move_to(a);
        path.quad_to(ctrl, b);
        self.canvas.stroke(&path, width, color);
    }

    /// Closed polygon through `points`, stroked in `stroke` (or `color`) and filled in `color`.
    pub fn draw_shape(&mut self, points: &[Point], width: f64, color: Rgba8, stroke: Option<Rgba8>) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        let mut path = BezPath::new();
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
        path.close_path();
        self.stroke_and_fill(&path, width, color, stroke);
    }

    /// Closed shape whose vertices alternate between quadratic control points and
    /// on-curve anchors: `points[0]` is an anchor, then `(ctrl, anchor)` pairs.
    pub fn draw_curve_shape(
        &mut self,
        points: &[Point],
        width: f64,
        color: Rgba8,
        stroke: Option<Rgba8>,
    ) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        let mut path = BezPath::new();
        path.move_to(first);
        for pair in rest.chunks_exact(2) {
            path.quad_to(pair[0], pair[1]);
        }
        path.close_path();
        self.stroke_and_fill(&path, width, color, stroke);
    }

    /// Triangle from `apex` to `base ± half_base`, stroked at `apex_width` and filled,
    /// plus a dot at `base` of `base_width` so the wide end reads as a rounded cap.
    pub fn draw_cone(
        &mut self,
        base: Point,
        apex: Point,
        apex_width: f64,
        base_width: f64,
        half_base: Vec2,
        color: Rgba8,
    ) {
        let mut path = BezPath::new();
        path.move_to(apex);
        path.line_to(base + half_base);
        path.line_to(base - half_base);
        path.close_path();
        self.stroke_and_fill(&path, apex_width, color, None);

        let mut dot = BezPath::new();
        dot.move_to(base);
        dot.line_to(Point::new(base.x + 1.0, base.y));
        self.canvas.stroke(&dot, base_width, color);
    }

    fn stroke_and_fill(&mut self, path: &BezPath, width: f64, color: Rgba8, stroke: Option<Rgba8>) {
        self.canvas.stroke(path, width, stroke.unwrap_or(color));
        self.canvas.fill(path, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/graphics.rs"]
mod tests;
