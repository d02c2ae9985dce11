use crate::{
    foundation::{
        core::{BezPath, Rgba8},
        error::{PuppetError, PuppetResult},
    },
    render::graphics::Canvas2d,
};

/// A rendered frame.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Bytes of the pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert to straight alpha in place. A no-op if already straight.
    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
    }
}

/// Rasterizing [`Canvas2d`] backed by `vello_cpu`.
///
/// Commands are encoded as they arrive and rasterized in [`CpuCanvas::finish`].
pub struct CpuCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl std::fmt::Debug for CpuCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuCanvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl CpuCanvas {
    /// Allocate a `width` x `height` surface cleared to `background`.
    pub fn new(width: u32, height: u32, background: Rgba8) -> PuppetResult<Self> {
        if width == 0 || height == 0 {
            return Err(PuppetError::validation(format!(
                "canvas size must be non-zero, got {width}x{height}"
            )));
        }
        let width: u16 = width
            .try_into()
            .map_err(|_| PuppetError::render("canvas width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| PuppetError::render("canvas height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_paint(paint(background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        Ok(Self { width, height, ctx })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Rasterize everything drawn so far.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl Canvas2d for CpuCanvas {
    fn stroke(&mut self, path: &BezPath, width: f64, color: Rgba8) {
        if width <= 0.0 || !width.is_finite() {
            return;
        }
        let stroke = vello_cpu::kurbo::Stroke::new(width)
            .with_caps(vello_cpu::kurbo::Cap::Round)
            .with_join(vello_cpu::kurbo::Join::Round);
        self.ctx.set_stroke(stroke);
        self.ctx.set_paint(paint(color));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn fill(&mut self, path: &BezPath, color: Rgba8) {
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: crate::foundation::core::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
