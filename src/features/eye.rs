use crate::{
    animation::channels::ChannelSet,
    foundation::core::{Point, Rgba8},
    model::{
        point::PointArena,
        shape::{Feature, FeatureStyle, Shape},
    },
    render::graphics::Graphics,
    transform::chain::Side,
};

/// Cartoon eye anchored on its shape's first point: white, pupil, lids and brow.
///
/// Reads `ez` (size), `e0y`/`e1y` (upper/lower lid openness), `ex`/`ey` plus `hry`
/// (gaze), and `eby`/`ebx` (brow raise and knit).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eye {
    pub side: Side,
    pub scale: f64,
}

impl Eye {
    pub fn new(side: Side, scale: f64) -> Self {
        Self { side, scale }
    }
}

impl Feature for Eye {
    fn draw(
        &self,
        shape: &Shape,
        points: &PointArena,
        g: &mut Graphics<'_>,
        channels: &ChannelSet,
        style: &FeatureStyle,
    ) {
        let Some(&anchor) = shape.points.first() else {
            return;
        };
        let c = |name: &str| channels.number(name);
        let s = self.scale;
        let side = self.side.sign();
        let origin = points.position(anchor);
        let (x0, y0) = (origin.x, origin.y);
        let dot = |x: f64, y: f64| (Point::new(x, y), Point::new(x + 1.0, y));

        let eye_size = 15.0 * s * c("ez");
        let upper_lid = (0.85 * c("e0y")).max(0.0);
        let lower_lid = (0.95 * c("e1y")).max(0.0);

        let (a, b) = dot(x0, y0);
        g.draw_line(a, b, eye_size + 3.0 * s, style.outline);
        g.draw_line(a, b, eye_size, Rgba8::WHITE);

        let pupil_x = x0 + 2.0 * s * c("hry") + 3.0 * s * c("ex");
        let pupil_y = y0 - 3.0 * s * c("ey");
        let (a, b) = dot(pupil_x, pupil_y);
        g.draw_line(a, b, 9.0 * s, style.pupil);

        // Lids are fill-coloured bars sliding over the white.
        let gaze = 3.0 * s * c("ey");
        let lid_half = side * eye_size / 3.0;
        for y in [
            y0 - upper_lid * eye_size - gaze,
            y0 + lower_lid * eye_size - gaze,
        ] {
            g.draw_line(
                Point::new(x0 - lid_half, y),
                Point::new(x0 + lid_half, y),
                eye_size + 3.0 * s,
                style.fill,
            );
        }

        if c("e0y") + c("e1y") < 3.0 / 5.0 {
            let half = side * eye_size / 2.0;
            g.draw_line(
                Point::new(x0 - half, y0),
                Point::new(x0 + half, y0),
                3.0 * s,
                style.outline,
            );
            if c("e1y") < 0.0 {
                g.draw_curve(
                    Point::new(x0 - half, y0 + 3.0 * s),
                    Point::new(x0, y0),
                    Point::new(x0 + half, y0 + 3.0 * s),
                    3.0 * s,
                    style.outline,
                );
            }
        }

        let (eby, ebx) = (c("eby"), c("ebx"));
        let up = eby.max(0.0);
        let down = -eby.min(0.0);

        let x1 = x0 + 15.0 * s * side - side * down * 8.0 * s;
        let x2 = x0 - side * up * ebx * 5.0 * s - side * down * 15.0 * s;
        let x3 = x0 - 10.0 * s * side;
        let y1 = y0 - 16.0 * s - 9.0 * s * (eby - up * ebx);
        let y2 = y0 - 19.0 * s - (8.0 * s * (eby - ebx) + 5.0 * s * ebx * up);
        let y3 = y0 - 18.0 * s - (10.0 * s * eby + 5.5 * s * down);

        g.draw_curve(
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(x3, y3),
            3.0 * s,
            style.outline,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/features/eye.rs"]
mod tests;
