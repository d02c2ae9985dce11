use super::*;
use crate::{
    model::point::Point as Joint,
    render::record::{DrawCommand, RecordingCanvas},
};

const STYLE: FeatureStyle = FeatureStyle {
    fill: Rgba8::opaque(0xcc, 0xcc, 0xcc),
    outline: Rgba8::opaque(0x55, 0x55, 0x55),
    pupil: Rgba8::opaque(0x55, 0x55, 0x55),
};

fn draw_mouth(channels: &ChannelSet) -> Vec<DrawCommand> {
    let mut points = PointArena::new();
    let a = points.add(Joint::new(-15.0, 100.0, 0.0));
    let b = points.add(Joint::new(15.0, 100.0, 0.0));
    let shape = Shape::anchor(vec![a, b]);
    let mut rec = RecordingCanvas::new();
    Mouth::new(1.0).draw(&shape, &points, &mut Graphics::new(&mut rec), channels, &STYLE);
    rec.into_commands()
}

fn with(pairs: &[(&str, f64)]) -> ChannelSet {
    let mut channels = ChannelSet::defaults();
    for &(k, v) in pairs {
        channels.set(k, v);
    }
    channels
}

#[test]
fn neutral_mouth_is_a_dark_curve_shape() {
    let cmds = draw_mouth(&ChannelSet::defaults());
    assert_eq!(cmds.len(), 2);
    assert_eq!(cmds[0].width(), Some(5.0));
    assert!(cmds.iter().all(|c| c.color() == STYLE.outline));
    assert!(matches!(cmds[1], DrawCommand::Fill { .. }));
    let xs: Vec<f64> = cmds[1]
        .path()
        .elements()
        .iter()
        .filter_map(|el| el.end_point())
        .map(|p| p.x)
        .collect();
    assert_eq!(xs, vec![-15.0, 15.0, -15.0]);
}

#[test]
fn teeth_whiten_the_opening() {
    let mut channels = with(&[("my", 1.0)]);
    channels.set("teeth", true);
    let cmds = draw_mouth(&channels);
    assert_eq!(cmds.len(), 3);
    assert_eq!(cmds[1].color(), Rgba8::WHITE);
    assert_eq!(cmds[0].color(), STYLE.outline);
    assert_eq!(cmds[2].width(), Some(2.0));
}

#[test]
fn pursed_lips_draw_curves_and_a_short_line() {
    let cmds = draw_mouth(&with(&[("mlz", 1.0)]));
    assert_eq!(cmds.len(), 5);
    let line = cmds[2].path().elements().to_vec();
    let start = line[0].end_point().expect("start");
    let end = line[1].end_point().expect("end");
    assert_eq!((start.x, end.x), (-9.0, 9.0));
    assert_eq!(start.y, 96.0);
}

#[test]
fn pressed_lips_are_a_flat_line() {
    let cmds = draw_mouth(&with(&[("mlz", -1.0)]));
    assert_eq!(cmds.len(), 3);
    assert!(cmds.iter().all(DrawCommand::is_stroke));
}

#[test]
fn tongue_draws_over_the_opening() {
    let cmds = draw_mouth(&with(&[("my", 1.0), ("mtz", 1.0)]));
    assert_eq!(cmds.len(), 4);
    assert_eq!(cmds[2].width(), Some(8.0));
    assert_eq!(cmds[3].color(), STYLE.fill);
}
