use std::f64::consts::FRAC_PI_2;

use super::*;
use crate::model::point::Point;

fn assert_close(a: Vec3, b: Vec3) {
    assert!(
        (a - b).length() < 1e-9,
        "expected {b:?}, got {a:?}"
    );
}

#[test]
fn rotate_xy_quarter_turns() {
    let mut pts = PointArena::new();
    let id = pts.add(Point::new(0.0, 10.0, 0.0));
    rotate_xy(&mut pts, &[id], Vec3::ZERO, FRAC_PI_2, 0.0);
    assert_close(pts.position(id), Vec3::new(0.0, 0.0, 10.0));

    rotate_xy(&mut pts, &[id], Vec3::ZERO, 0.0, FRAC_PI_2);
    assert_close(pts.position(id), Vec3::new(-10.0, 0.0, 0.0));
}

#[test]
fn rotation_is_relative_to_pivot() {
    let mut pts = PointArena::new();
    let id = pts.add(Point::new(5.0, 0.0, 0.0));
    let pivot = Vec3::new(5.0, -3.0, 2.0);
    rotate_zxy(&mut pts, &[id], pivot, 0.0, FRAC_PI_2, 0.0);
    // (0, 3, -2) relative, rotated in Y-Z by 90 degrees -> (0, 2, 3)
    assert_close(pts.position(id), Vec3::new(5.0, -1.0, 5.0));
}

#[test]
fn point_at_pivot_is_fixed() {
    let mut pts = PointArena::new();
    let pivot = Vec3::new(1.0, 2.0, 3.0);
    let id = pts.add(Point::at(pivot));
    rotate_zxy(&mut pts, &[id], pivot, 0.7, -1.1, 2.5);
    assert_close(pts.position(id), pivot);
}

#[test]
fn zxy_axis_order_is_sequential() {
    // Z then X: (10,0,0) -> (0,10,0) -> (0,0,10).
    let mut pts = PointArena::new();
    let id = pts.add(Point::new(10.0, 0.0, 0.0));
    rotate_zxy(&mut pts, &[id], Vec3::ZERO, FRAC_PI_2, FRAC_PI_2, 0.0);
    assert_close(pts.position(id), Vec3::new(0.0, 0.0, 10.0));

    // Applying X before Z gives a different result for the same angles.
    let mut pts = PointArena::new();
    let id = pts.add(Point::new(10.0, 0.0, 0.0));
    rotate_xy(&mut pts, &[id], Vec3::ZERO, FRAC_PI_2, 0.0);
    rotate_zxy(&mut pts, &[id], Vec3::ZERO, FRAC_PI_2, 0.0, 0.0);
    assert_close(pts.position(id), Vec3::new(0.0, 10.0, 0.0));
}

#[test]
fn rotation_preserves_distance_to_pivot() {
    let mut pts = PointArena::new();
    let pivot = Vec3::new(-4.0, 7.0, 1.0);
    let ids: Vec<_> = [(1.0, 2.0, 3.0), (-8.0, 0.5, 4.0), (0.0, 0.0, -9.0)]
        .into_iter()
        .map(|(x, y, z)| pts.add(Point::new(x, y, z)))
        .collect();
    let before: Vec<f64> = ids
        .iter()
        .map(|&id| (pts.position(id) - pivot).length())
        .collect();
    rotate_zxy(&mut pts, &ids, pivot, 0.3, -0.9, 1.7);
    for (&id, d) in ids.iter().zip(before) {
        assert!(((pts.position(id) - pivot).length() - d).abs() < 1e-9);
    }
}
