//! Capsule geometry: thick-line bodies with a border, tapered cones and smudges.
//!
//! Every body is drawn twice, once at full width in the outline colour and once
//! inset by `2 * border` in the fill colour, so the border shows as a rim.

use crate::{
    foundation::{
        core::{Point, Rgba8, Vec2},
        math::perpendicular,
    },
    model::{
        point::PointArena,
        shape::{Shape, Smudge},
    },
    render::graphics::Graphics,
};

/// Draw `shape`'s body and then each of its smudges.
pub fn draw(shape: &Shape, points: &PointArena, g: &mut Graphics<'_>, fill: Rgba8, outline: Rgba8) {
    let projected: Vec<Point> = shape
        .points
        .iter()
        .map(|&id| points.position(id).to_point())
        .collect();
    draw_points(
        g,
        &projected,
        shape.size,
        shape.size2,
        shape.border,
        fill,
        outline,
    );

    for smudge in &shape.smudges {
        draw_shape_smudge(g, smudge, points, shape.border, fill);
    }
}

/// Two points draw a capsule (`size` at the first, `size2` at the second); three or
/// more draw a closed polygon at `size`. A lone point draws a round dot.
pub fn draw_points(
    g: &mut Graphics<'_>,
    points: &[Point],
    size: f64,
    size2: Option<f64>,
    border: f64,
    fill: Rgba8,
    outline: Rgba8,
) {
    match points {
        [] => {}
        [p] => draw_capsule(g, *p, *p, size, size, border, fill, outline),
        [a, b] => draw_capsule(g, *a, *b, size, size2.unwrap_or(size), border, fill, outline),
        _ => {
            g.draw_shape(points, size, outline, None);
            g.draw_shape(points, size - border * 2.0, fill, None);
        }
    }
}

/// Segment from `a` (width `wa`) to `b` (width `wb`).
///
/// Equal widths give a plain round-capped line. Otherwise the segment becomes a cone
/// whose base sits at the wider end.
#[allow(clippy::too_many_arguments)]
pub fn draw_capsule(
    g: &mut Graphics<'_>,
    a: Point,
    b: Point,
    wa: f64,
    wb: f64,
    border: f64,
    fill: Rgba8,
    outline: Rgba8,
) {
    if wa == wb {
        g.draw_line(a, b, wa, outline);
        g.draw_line(a, b, wa - border * 2.0, fill);
        return;
    }
    let (base, apex, wide, narrow) = if wa > wb { (a, b, wa, wb) } else { (b, a, wb, wa) };

    let inset = border * 2.0;
    let half_base = cone_offset(base, apex, (wide - narrow) / 2.0);
    g.draw_cone(base, apex, narrow, wide, half_base, outline);
    g.draw_cone(base, apex, narrow - inset, wide - inset, half_base, fill);
}

/// Short stub from `from` toward `toward`, clipped to `length`, tapering from
/// `w_start` to `w_end`.
pub fn draw_smudge(
    g: &mut Graphics<'_>,
    from: Point,
    toward: Point,
    w_start: f64,
    w_end: f64,
    length: f64,
    color: Rgba8,
) {
    let delta = toward - from;
    let len = length.min(delta.hypot());
    let angle = delta.y.atan2(delta.x);
    let end = from + Vec2::new(angle.cos() * len, angle.sin() * len);

    if w_start == w_end {
        g.draw_line(from, end, w_start, color);
        return;
    }
    let (base, apex, wide, narrow) = if w_start > w_end {
        (from, end, w_start, w_end)
    } else {
        (end, from, w_end, w_start)
    };
    let half_base = cone_offset(base, apex, (wide - narrow) / 2.0);
    g.draw_cone(base, apex, narrow, wide, half_base, color);
}

fn draw_shape_smudge(
    g: &mut Graphics<'_>,
    smudge: &Smudge,
    points: &PointArena,
    border: f64,
    color: Rgba8,
) {
    let w_start = smudge.size - border * 2.0;
    let w_end = smudge.size2.map_or(w_start, |s| s - border * 2.0);
    let length = smudge.scale.unwrap_or(2.0) * border;
    draw_smudge(
        g,
        points.position(smudge.points[0]).to_point(),
        points.position(smudge.points[1]).to_point(),
        w_start,
        w_end,
        length,
        color,
    );
}

fn cone_offset(base: Point, apex: Point, half_width: f64) -> Vec2 {
    let (px, py) = perpendicular(apex.x - base.x, apex.y - base.y);
    Vec2::new(px * half_width, py * half_width)
}

#[cfg(test)]
#[path = "../../tests/unit/render/capsule.rs"]
mod tests;
