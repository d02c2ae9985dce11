use super::*;
use crate::{
    foundation::core::Point,
    render::record::{DrawCommand, RecordingCanvas},
};
use kurbo::PathEl;

fn record(puppet: &mut Puppet, w: f64, h: f64, x: f64, y: f64, ch: Option<&ChannelSet>) -> Vec<DrawCommand> {
    let mut rec = RecordingCanvas::new();
    puppet.draw(&mut rec, w, h, x, y, ch).expect("draw");
    rec.into_commands()
}

fn el_points(el: PathEl) -> Vec<Point> {
    match el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => vec![p],
        PathEl::QuadTo(a, b) => vec![a, b],
        PathEl::CurveTo(a, b, c) => vec![a, b, c],
        PathEl::ClosePath => vec![],
    }
}

#[test]
fn default_config_matches_reference_look() {
    let cfg = PuppetConfig::default();
    assert_eq!((cfg.reference_width, cfg.reference_height), (600.0, 400.0));
    assert_eq!(cfg.fill_colors.len(), 3);
    assert_eq!(cfg.fill_color(1), Rgba8::opaque(0x88, 0x88, 0x88));
    assert_eq!(cfg.fill_color(7), cfg.fill_color(0));
    assert_eq!(cfg.pupil(), cfg.outline_color);
    assert!(cfg.validate().is_ok());
}

#[test]
fn config_json_is_partial_and_validated() {
    let cfg = PuppetConfig::from_json_str(
        r##"{ "outline_color": "#102030", "proportions": { "palm_radius": 30 } }"##,
    )
    .expect("config");
    assert_eq!(cfg.outline_color, Rgba8::opaque(0x10, 0x20, 0x30));
    assert_eq!(cfg.proportions.palm_radius, 30.0);
    assert_eq!(cfg.reference_width, 600.0);

    assert!(matches!(
        PuppetConfig::from_json_str(r#"{ "reference_width": 0 }"#),
        Err(PuppetError::Validation(_))
    ));
    assert!(matches!(
        PuppetConfig::from_json_str(r#"{ "fill_colors": [] }"#),
        Err(PuppetError::Validation(_))
    ));
    assert!(matches!(
        PuppetConfig::from_json_str("[1, 2]"),
        Err(PuppetError::Serde(_))
    ));
    assert!(matches!(
        PuppetConfig::from_json_str(r#"{ "proportions": [5, 3] }"#),
        Err(PuppetError::Serde(_))
    ));
}

#[test]
fn array_configs_are_not_read_positionally() {
    for text in ["[1, 2]", "[600, 400, []]", "4", "null"] {
        assert!(
            PuppetConfig::from_json_str(text).is_err(),
            "accepted {text}"
        );
    }
}

#[test]
fn scale_fits_the_smaller_axis() {
    let cfg = PuppetConfig::default();
    assert_eq!(cfg.scale_for(600.0, 400.0), 1.0);
    assert_eq!(cfg.scale_for(300.0, 400.0), 0.5);
    assert_eq!(cfg.scale_for(1200.0, 200.0), 0.5);
}

#[test]
fn draw_rejects_degenerate_boxes() {
    let mut puppet = Puppet::default();
    let mut rec = RecordingCanvas::new();
    for (w, h) in [(0.0, 400.0), (600.0, -1.0), (f64::NAN, 400.0), (600.0, f64::INFINITY)] {
        assert!(matches!(
            puppet.draw(&mut rec, w, h, 0.0, 0.0, None),
            Err(PuppetError::Validation(_))
        ));
    }
    assert!(puppet.draw(&mut rec, 600.0, 400.0, f64::NAN, 0.0, None).is_err());
    assert!(rec.commands().is_empty());
    assert!(puppet.model().is_none());
}

#[test]
fn model_is_built_lazily_and_rebuilt_on_scale_change() {
    let mut puppet = Puppet::default();
    assert_eq!(puppet.scale(), None);

    record(&mut puppet, 600.0, 400.0, 0.0, 0.0, None);
    assert_eq!(puppet.scale(), Some(1.0));
    assert_eq!(puppet.model().map(|m| m.shapes().len()), Some(48));

    // Mark the retained model; only a rebuild replaces the torso width.
    let torso_size = |puppet: &Puppet| {
        let rig = puppet.rig.as_ref().expect("built");
        rig.model.shape(rig.skeleton.torso).expect("torso").size
    };
    let body_radius = PuppetConfig::default().proportions.body_radius;
    assert_eq!(torso_size(&puppet), body_radius);
    {
        let rig = puppet.rig.as_mut().expect("built");
        rig.model.shape_mut(rig.skeleton.torso).expect("torso").size = 999.0;
    }

    record(&mut puppet, 600.0, 500.0, 0.0, 0.0, None);
    assert_eq!(puppet.scale(), Some(1.0));
    assert_eq!(torso_size(&puppet), 999.0);

    record(&mut puppet, 300.0, 200.0, 0.0, 0.0, None);
    assert_eq!(puppet.scale(), Some(0.5));
    assert_eq!(torso_size(&puppet), body_radius * 0.5);
}

#[test]
fn drawing_is_deterministic() {
    let mut a = Puppet::default();
    let mut b = Puppet::default();
    let first = record(&mut a, 600.0, 400.0, 0.0, 0.0, None);
    assert!(!first.is_empty());
    assert_eq!(first, record(&mut a, 600.0, 400.0, 0.0, 0.0, None));
    assert_eq!(first, record(&mut b, 600.0, 400.0, 0.0, 0.0, None));
}

#[test]
fn missing_channels_fall_back_to_defaults() {
    let mut puppet = Puppet::default();
    let implicit = record(&mut puppet, 600.0, 400.0, 0.0, 0.0, None);
    let explicit = record(&mut puppet, 600.0, 400.0, 0.0, 0.0, Some(&ChannelSet::defaults()));
    let partial = record(&mut puppet, 600.0, 400.0, 0.0, 0.0, Some(&ChannelSet::new()));
    assert_eq!(implicit, explicit);
    assert_eq!(implicit, partial);
}

#[test]
fn animator_channels_drive_undirected_draws() {
    let mut puppet = Puppet::default();
    let neutral = record(&mut puppet, 600.0, 400.0, 0.0, 0.0, None);

    let mut pose = ChannelSet::new();
    pose.set("hry", 0.4);
    pose.set("teeth", true);
    puppet.animator().set_target(&pose);
    assert_eq!(puppet.animator().channels().number("hry"), 0.0);
    assert!(puppet.animator().channels().flag("teeth"));

    puppet.animator().tween();
    let live = puppet.animator().channels().clone();
    assert_eq!(live.number("hry"), 0.2);

    let animated = record(&mut puppet, 600.0, 400.0, 0.0, 0.0, None);
    assert_ne!(neutral, animated);
    assert_eq!(animated, record(&mut puppet, 600.0, 400.0, 0.0, 0.0, Some(&live)));
}

#[test]
fn draw_offset_translates_every_command() {
    let mut puppet = Puppet::default();
    let base = record(&mut puppet, 600.0, 400.0, 0.0, 0.0, None);
    let moved = record(&mut puppet, 600.0, 400.0, 25.0, -10.0, None);
    assert_eq!(base.len(), moved.len());

    for (a, b) in base.iter().zip(&moved) {
        assert_eq!(a.color(), b.color());
        assert_eq!(a.width(), b.width());
        let (pa, pb) = (a.path().elements(), b.path().elements());
        assert_eq!(pa.len(), pb.len());
        for (&ea, &eb) in pa.iter().zip(pb) {
            for (p, q) in el_points(ea).into_iter().zip(el_points(eb)) {
                assert!((q.x - p.x - 25.0).abs() < 1e-6, "{p:?} -> {q:?}");
                assert!((q.y - p.y + 10.0).abs() < 1e-6, "{p:?} -> {q:?}");
            }
        }
    }
}

#[test]
fn commands_use_only_configured_colours() {
    let cfg = PuppetConfig {
        pupil_color: Some(Rgba8::opaque(0, 0, 255)),
        ..PuppetConfig::default()
    };
    let mut puppet = Puppet::new(cfg.clone()).expect("puppet");
    let mut teeth = ChannelSet::new();
    teeth.set("teeth", true);
    let cmds = record(&mut puppet, 600.0, 400.0, 0.0, 0.0, Some(&teeth));

    let mut palette = cfg.fill_colors.clone();
    palette.extend([cfg.outline_color, cfg.pupil(), Rgba8::WHITE]);
    assert!(cmds.iter().all(|c| palette.contains(&c.color())));
    assert!(cmds.iter().any(|c| c.color() == cfg.pupil()));

    // Back-most shape paints its outline first.
    assert_eq!(cmds[0].color(), cfg.outline_color);
}
