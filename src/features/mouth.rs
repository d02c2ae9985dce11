use crate::{
    animation::channels::ChannelSet,
    foundation::core::{Point, Rgba8},
    model::{
        point::PointArena,
        shape::{Feature, FeatureStyle, Shape},
    },
    render::graphics::Graphics,
};

/// Mouth spanning its shape's two corner points.
///
/// `mx` widens, `my` opens, `mly` sets the mood (smile/frown), `mlz` purses
/// (positive) or presses (negative) the lips, `mty`/`mtz` place the tongue and the
/// `teeth` flag whitens the opening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mouth {
    pub scale: f64,
}

impl Mouth {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Feature for Mouth {
    fn draw(
        &self,
        shape: &Shape,
        points: &PointArena,
        g: &mut Graphics<'_>,
        channels: &ChannelSet,
        style: &FeatureStyle,
    ) {
        let [left, right] = match shape.points.as_slice() {
            &[a, b, ..] => [points.position(a), points.position(b)],
            _ => return,
        };
        let c = |name: &str| channels.number(name);
        let s = self.scale;
        let outline = style.outline;

        let mut height = (left.y + right.y) / 2.0;
        let center = (left.x + right.x) / 2.0;
        let width = (left.x - right.x).abs();
        let mut wide = c("mx") * width / 2.0 * s;

        let mlz = c("mlz");
        let pursed = mlz > 0.25;
        if pursed {
            wide = -6.0 * s;
            height -= 4.0 * s;
        }

        let half = (width / 2.0 + wide).max(1.0);
        let x1 = center - half;
        let x2 = center + half;

        if pursed {
            g.draw_curve(
                Point::new(x1, height - 4.0 * s),
                Point::new(center, height - 8.0 * s),
                Point::new(x2, height - 4.0 * s),
                3.0 * s,
                outline,
            );
            g.draw_curve(
                Point::new(x1, height + 6.0 * s),
                Point::new(center, height + 10.0 * s),
                Point::new(x2, height + 6.0 * s),
                3.0 * s,
                outline,
            );
        }

        if pursed || mlz < -0.25 {
            g.draw_line(Point::new(x1, height), Point::new(x2, height), 3.0 * s, outline);
            for x in [x1, x2] {
                g.draw_line(
                    Point::new(x, height - 2.0 * s),
                    Point::new(x, height + 2.0 * s),
                    3.0 * s,
                    outline,
                );
            }
            return;
        }

        let line_width = 5.0 * s + 2.0 * s * c("mx").abs() / 25.0 * s;

        let has_room = x2 - x1 > 2.0 * s;
        let open = if has_room { c("my") } else { 0.0 };
        let mood = if has_room { c("mly") } else { 0.0 };

        let shift = -5.0 * s * open - 5.0 * s * open * (1.0 - mood.abs());
        height += shift;
        let size = 5.0 + (shift * 2.0).abs();
        let y1 = size * (open - c("mly")).min(0.0);
        let y0 = size * (mood - 1.0) / 2.0 * open.max(mood.abs());
        let y2 = size * (y1 / size - open);

        let teeth = channels.flag("teeth");
        let fill = if teeth { Rgba8::WHITE } else { outline };
        g.draw_curve_shape(
            &[
                Point::new(x1, height - y0),
                Point::new(center, height - y1),
                Point::new(x2, height - y0),
                Point::new(center, height - y2),
                Point::new(x1, height - y0),
            ],
            line_width,
            fill,
            Some(outline),
        );

        if teeth {
            g.draw_line(
                Point::new(x1, height - y0),
                Point::new(x2, height - y0),
                2.0 * s,
                outline,
            );
        }

        if c("mtz") > 0.25 {
            let mty = c("mty");
            let y = if mty > 0.0 {
                height - y0 - (y2 - y0) * mty
            } else {
                height - y0 + (y1 - y0) * mty
            };
            let (a, b) = (Point::new((x1 + center) / 2.0, y), Point::new((x2 + center) / 2.0, y));
            g.draw_line(a, b, 8.0 * s, outline);
            g.draw_line(a, b, 3.0 * s, style.fill);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/features/mouth.rs"]
mod tests;
