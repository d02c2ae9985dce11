use super::*;
use crate::{
    model::point::Point as Joint,
    render::record::{DrawCommand, RecordingCanvas},
};

const STYLE: FeatureStyle = FeatureStyle {
    fill: Rgba8::opaque(0xcc, 0xcc, 0xcc),
    outline: Rgba8::opaque(0x55, 0x55, 0x55),
    pupil: Rgba8::opaque(0x10, 0x10, 0x10),
};

fn draw_eye(eye: Eye, channels: &ChannelSet) -> Vec<DrawCommand> {
    let mut points = PointArena::new();
    let anchor = points.add(Joint::new(100.0, 50.0, 0.0));
    let shape = Shape::anchor(vec![anchor]);
    let mut rec = RecordingCanvas::new();
    eye.draw(&shape, &points, &mut Graphics::new(&mut rec), channels, &STYLE);
    rec.into_commands()
}

#[test]
fn open_eye_draws_white_pupil_lids_and_brow() {
    let cmds = draw_eye(Eye::new(Side::Left, 1.0), &ChannelSet::defaults());
    assert_eq!(cmds.len(), 6);
    assert_eq!(cmds[0].width(), Some(18.0));
    assert_eq!(cmds[0].color(), STYLE.outline);
    assert_eq!(cmds[1].width(), Some(15.0));
    assert_eq!(cmds[1].color(), Rgba8::WHITE);
    assert_eq!(cmds[2].color(), STYLE.pupil);
    assert_eq!(cmds[3].color(), STYLE.fill);
    assert_eq!(cmds[4].color(), STYLE.fill);
    assert_eq!(cmds[5].color(), STYLE.outline);
}

#[test]
fn gaze_moves_the_pupil() {
    let mut channels = ChannelSet::defaults();
    channels.set("ex", 1.0);
    channels.set("ey", 1.0);
    let cmds = draw_eye(Eye::new(Side::Right, 2.0), &channels);
    let start = cmds[2].path().elements()[0].end_point().expect("move_to");
    assert_eq!(start, Point::new(106.0, 44.0));
}

#[test]
fn closed_eye_adds_lash_line_and_lower_curve() {
    let mut channels = ChannelSet::defaults();
    channels.set("e0y", 0.0);
    channels.set("e1y", -0.5);
    let cmds = draw_eye(Eye::new(Side::Left, 1.0), &channels);
    assert_eq!(cmds.len(), 8);
    assert_eq!(cmds[5].width(), Some(3.0));
    assert!(cmds[6].path().elements().len() == 2);
}

#[test]
fn sides_mirror_the_brow() {
    let channels = ChannelSet::defaults();
    let left = draw_eye(Eye::new(Side::Left, 1.0), &channels);
    let right = draw_eye(Eye::new(Side::Right, 1.0), &channels);
    let brow_start = |cmds: &[DrawCommand]| cmds[5].path().elements()[0].end_point().expect("start");
    assert_eq!(brow_start(&left).x, 115.0);
    assert_eq!(brow_start(&right).x, 85.0);
}

#[test]
fn shape_without_anchor_draws_nothing() {
    let mut rec = RecordingCanvas::new();
    Eye::new(Side::Left, 1.0).draw(
        &Shape::anchor(Vec::new()),
        &PointArena::new(),
        &mut Graphics::new(&mut rec),
        &ChannelSet::defaults(),
        &STYLE,
    );
    assert!(rec.commands().is_empty());
}
