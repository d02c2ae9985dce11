use super::*;
use crate::render::graphics::Graphics;
use kurbo::Point;

#[test]
fn rejects_degenerate_sizes() {
    assert!(matches!(
        CpuCanvas::new(0, 10, Rgba8::WHITE),
        Err(PuppetError::Validation(_))
    ));
    assert!(matches!(
        CpuCanvas::new(70_000, 10, Rgba8::WHITE),
        Err(PuppetError::Render(_))
    ));
}

#[test]
fn blank_canvas_is_background() {
    let frame = CpuCanvas::new(8, 4, Rgba8::WHITE).expect("canvas").finish();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn thick_line_covers_its_middle() {
    let mut canvas = CpuCanvas::new(32, 32, Rgba8::WHITE).expect("canvas");
    let red = Rgba8::opaque(255, 0, 0);
    Graphics::new(&mut canvas).draw_line(Point::new(4.0, 16.0), Point::new(28.0, 16.0), 8.0, red);
    let frame = canvas.finish();

    assert_eq!(frame.pixel(16, 16), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(16, 2), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(32, 0), None);
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 0, 128, 128],
        premultiplied: true,
    };
    frame.unpremultiply();
    assert!(!frame.premultiplied);
    assert_eq!(frame.data, vec![128, 0, 255, 128]);
}
