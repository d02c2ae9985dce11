use super::*;
use crate::{
    foundation::core::Vec3,
    model::{point::Point as Joint, store::Model},
    render::record::{DrawCommand, RecordingCanvas},
};

const FILL: Rgba8 = Rgba8::opaque(0xcc, 0xcc, 0xcc);
const OUTLINE: Rgba8 = Rgba8::opaque(0x55, 0x55, 0x55);

fn record(f: impl FnOnce(&mut Graphics<'_>)) -> Vec<DrawCommand> {
    let mut rec = RecordingCanvas::new();
    f(&mut Graphics::new(&mut rec));
    rec.into_commands()
}

fn endpoints(cmd: &DrawCommand) -> Vec<Point> {
    cmd.path()
        .elements()
        .iter()
        .filter_map(|el| el.end_point())
        .collect()
}

#[test]
fn equal_widths_draw_outline_then_inset_fill() {
    let mut model = Model::new();
    let a = model.add_point(Joint::new(0.0, 0.0, 0.0));
    let b = model.add_point(Joint::new(100.0, 0.0, 0.0));
    let id = model.add_shape(Shape::new(vec![a, b], 20.0, 5.0));

    let shape = model.shape(id).expect("shape");
    let cmds = record(|g| draw(shape, model.points(), g, FILL, OUTLINE));

    assert_eq!(cmds.len(), 2);
    assert_eq!(cmds[0].width(), Some(20.0));
    assert_eq!(cmds[0].color(), OUTLINE);
    assert_eq!(cmds[1].width(), Some(10.0));
    assert_eq!(cmds[1].color(), FILL);
    for c in &cmds {
        assert_eq!(
            endpoints(c),
            vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]
        );
    }
}

#[test]
fn coincident_points_still_draw_a_dot() {
    let p = Point::new(7.0, 7.0);
    let cmds = record(|g| draw_capsule(g, p, p, 12.0, 12.0, 2.0, FILL, OUTLINE));
    assert_eq!(cmds.len(), 2);
    assert_eq!(endpoints(&cmds[0]), vec![p, Point::new(8.0, 7.0)]);
}

#[test]
fn tapered_capsule_puts_cone_base_at_wide_end() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.0, 50.0);
    // Narrow first point, wide second: the base must land on `b`.
    let cmds = record(|g| draw_capsule(g, a, b, 10.0, 30.0, 2.0, FILL, OUTLINE));

    // Outline cone (stroke, fill, dot) then fill cone (stroke, fill, dot).
    assert_eq!(cmds.len(), 6);
    let outline_tri = endpoints(&cmds[0]);
    assert_eq!(outline_tri[0], a);
    for p in &outline_tri[1..3] {
        assert!((p.y - 50.0).abs() < 1e-9);
        assert!((p.x.abs() - 10.0).abs() < 1e-9, "half base {p:?}");
    }
    assert_eq!(cmds[0].width(), Some(10.0));
    assert_eq!(cmds[2].width(), Some(30.0));
    assert_eq!(endpoints(&cmds[2])[0], b);

    assert_eq!(cmds[3].width(), Some(6.0));
    assert_eq!(cmds[3].color(), FILL);
    assert_eq!(cmds[5].width(), Some(26.0));
    assert!(cmds[..3].iter().all(|c| c.color() == OUTLINE));
    assert!(cmds[3..].iter().all(|c| c.color() == FILL));
}

#[test]
fn polygon_outline_then_fill() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(40.0, 0.0),
        Point::new(40.0, 40.0),
        Point::new(0.0, 40.0),
    ];
    let cmds = record(|g| draw_points(g, &pts, 10.0, Some(99.0), 3.0, FILL, OUTLINE));
    assert_eq!(cmds.len(), 4);
    assert_eq!(cmds[0].width(), Some(10.0));
    assert_eq!(cmds[0].color(), OUTLINE);
    assert_eq!(cmds[1].color(), OUTLINE);
    assert_eq!(cmds[2].width(), Some(4.0));
    assert_eq!(cmds[3].color(), FILL);
}

#[test]
fn empty_point_list_draws_nothing() {
    assert!(record(|g| draw_points(g, &[], 10.0, None, 1.0, FILL, OUTLINE)).is_empty());
}

#[test]
fn smudge_is_clipped_to_requested_length() {
    let cmds = record(|g| {
        draw_smudge(
            g,
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            8.0,
            8.0,
            10.0,
            FILL,
        )
    });
    assert_eq!(cmds.len(), 1);
    let ends = endpoints(&cmds[0]);
    assert!((ends[1].x - 10.0).abs() < 1e-9);

    let short = record(|g| {
        draw_smudge(
            g,
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            8.0,
            8.0,
            10.0,
            FILL,
        )
    });
    let ends = endpoints(&short[0]);
    assert!((ends[1].x - 3.0).abs() < 1e-9 && (ends[1].y - 4.0).abs() < 1e-9);
}

#[test]
fn tapered_smudge_bases_at_wider_end() {
    let from = Point::new(0.0, 0.0);
    let toward = Point::new(100.0, 0.0);

    let widening = record(|g| draw_smudge(g, from, toward, 4.0, 12.0, 10.0, FILL));
    assert_eq!(widening.len(), 3);
    assert_eq!(endpoints(&widening[0])[0], from);
    assert_eq!(widening[0].width(), Some(4.0));
    assert_eq!(widening[2].width(), Some(12.0));

    let narrowing = record(|g| draw_smudge(g, from, toward, 12.0, 4.0, 10.0, FILL));
    let apex = endpoints(&narrowing[0])[0];
    assert!((apex.x - 10.0).abs() < 1e-9);
    assert_eq!(endpoints(&narrowing[2])[0], from);
}

#[test]
fn shape_smudges_use_fill_colour_after_body() {
    let mut model = Model::new();
    let a = model.add_point(Joint::at(Vec3::new(0.0, 0.0, 0.0)));
    let b = model.add_point(Joint::at(Vec3::new(0.0, 60.0, 0.0)));
    let id = model.add_shape(
        Shape::new(vec![a, b], 30.0, 5.0).smudge(Smudge::new(a, b, 30.0).scale(3.0)),
    );
    let shape = model.shape(id).expect("shape");
    let cmds = record(|g| draw(shape, model.points(), g, FILL, OUTLINE));

    assert_eq!(cmds.len(), 3);
    let smudge = &cmds[2];
    assert_eq!(smudge.color(), FILL);
    assert_eq!(smudge.width(), Some(20.0));
    let ends = endpoints(smudge);
    assert!((ends[1].y - 15.0).abs() < 1e-9);
}
