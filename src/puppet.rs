use std::path::Path;

use crate::{
    animation::{animator::Animator, channels::ChannelSet},
    foundation::{
        core::Rgba8,
        error::{PuppetError, PuppetResult},
    },
    model::{
        shape::{FeatureStyle, ShapeKind},
        store::Model,
    },
    render::{
        capsule,
        graphics::{Canvas2d, Graphics},
    },
    rig::{pose, proportions::Proportions, skeleton::Skeleton},
};

/// Appearance and layout settings for a [`Puppet`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PuppetConfig {
    /// Canvas size at which the figure is drawn at scale 1.
    pub reference_width: f64,
    pub reference_height: f64,
    /// Fill palette indexed by each shape's `color`.
    pub fill_colors: Vec<Rgba8>,
    pub outline_color: Rgba8,
    /// Pupil colour; the outline colour when unset.
    pub pupil_color: Option<Rgba8>,
    /// Clear colour for rasterizing backends.
    pub background: Rgba8,
    /// Unscaled measurements.
    pub proportions: Proportions,
}

impl Default for PuppetConfig {
    fn default() -> Self {
        let light = Rgba8::opaque(0xcc, 0xcc, 0xcc);
        Self {
            reference_width: 600.0,
            reference_height: 400.0,
            fill_colors: vec![light, Rgba8::opaque(0x88, 0x88, 0x88), light],
            outline_color: Rgba8::opaque(0x55, 0x55, 0x55),
            pupil_color: None,
            background: Rgba8::WHITE,
            proportions: Proportions::default(),
        }
    }
}

impl PuppetConfig {
    /// Parse a partial config object; missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> PuppetResult<Self> {
        let mut value: serde_json::Value = serde_json::from_str(s)?;
        let obj = value
            .as_object_mut()
            .ok_or_else(|| PuppetError::serde("puppet config must be a JSON object"))?;
        let proportions = obj
            .remove("proportions")
            .map(Proportions::from_json_value)
            .transpose()?;

        let mut cfg: Self = serde_json::from_value(value)?;
        if let Some(p) = proportions {
            cfg.proportions = p;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> PuppetResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PuppetError::validation(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> PuppetResult<()> {
        for (name, v) in [
            ("reference_width", self.reference_width),
            ("reference_height", self.reference_height),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(PuppetError::validation(format!(
                    "{name} must be a positive number, got {v}"
                )));
            }
        }
        if self.fill_colors.is_empty() {
            return Err(PuppetError::validation("fill_colors must not be empty"));
        }
        Ok(())
    }

    /// Palette entry `index`, falling back to the first entry.
    pub fn fill_color(&self, index: usize) -> Rgba8 {
        self.fill_colors
            .get(index)
            .or(self.fill_colors.first())
            .copied()
            .unwrap_or(Rgba8::WHITE)
    }

    pub fn pupil(&self) -> Rgba8 {
        self.pupil_color.unwrap_or(self.outline_color)
    }

    /// Uniform scale for a `width` x `height` canvas.
    pub fn scale_for(&self, width: f64, height: f64) -> f64 {
        (width / self.reference_width).min(height / self.reference_height)
    }
}

struct Rig {
    scale: f64,
    proportions: Proportions,
    model: Model,
    skeleton: Skeleton,
}

impl Rig {
    #[tracing::instrument(level = "debug", skip(base))]
    fn build(base: &Proportions, scale: f64) -> Self {
        let proportions = base.scaled(scale);
        let mut model = Model::new();
        let skeleton = Skeleton::build(&proportions, &mut model);
        Self {
            scale,
            proportions,
            model,
            skeleton,
        }
    }
}

/// The posable, drawable figure.
///
/// The point/shape model is built lazily on the first draw and rebuilt whenever the
/// canvas scale changes; handles from [`Puppet::skeleton`] do not survive a rebuild.
pub struct Puppet {
    config: PuppetConfig,
    rig: Option<Rig>,
    animator: Option<Animator>,
}

impl std::fmt::Debug for Puppet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Puppet")
            .field("scale", &self.scale())
            .field("has_animator", &self.animator.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Puppet {
    fn default() -> Self {
        Self {
            config: PuppetConfig::default(),
            rig: None,
            animator: None,
        }
    }
}

impl Puppet {
    pub fn new(config: PuppetConfig) -> PuppetResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rig: None,
            animator: None,
        })
    }

    pub fn config(&self) -> &PuppetConfig {
        &self.config
    }

    /// Scale of the current model, if one has been built.
    pub fn scale(&self) -> Option<f64> {
        self.rig.as_ref().map(|r| r.scale)
    }

    pub fn model(&self) -> Option<&Model> {
        self.rig.as_ref().map(|r| &r.model)
    }

    pub fn skeleton(&self) -> Option<&Skeleton> {
        self.rig.as_ref().map(|r| &r.skeleton)
    }

    /// The live animator, created from the channel defaults on first use.
    pub fn animator(&mut self) -> &mut Animator {
        self.animator.get_or_insert_with(Animator::with_defaults)
    }

    pub fn set_animator(&mut self, animator: Animator) -> &mut Animator {
        self.animator.insert(animator)
    }

    /// Pose and draw one frame onto `canvas`.
    ///
    /// The figure stands centred on `x + width / 2` with its waist at `y + height`.
    /// `channels` defaults to the animator's live values, or the channel defaults
    /// when there is no animator. Missing channels are filled from the defaults.
    #[tracing::instrument(level = "debug", skip(self, canvas, channels))]
    pub fn draw(
        &mut self,
        canvas: &mut dyn Canvas2d,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
        channels: Option<&ChannelSet>,
    ) -> PuppetResult<()> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(PuppetError::validation(format!(
                "draw size must be positive, got {width}x{height}"
            )));
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(PuppetError::validation(format!(
                "draw offset must be finite, got ({x}, {y})"
            )));
        }

        let channels = match channels {
            Some(c) => c.clone().with_defaults(),
            None => self
                .animator
                .as_ref()
                .map_or_else(ChannelSet::defaults, |a| a.channels().clone().with_defaults()),
        };

        let scale = self.config.scale_for(width, height);
        let stale = self.rig.as_ref().is_none_or(|r| r.scale != scale);
        if stale {
            let old = self.scale();
            let rig = Rig::build(&self.config.proportions, scale);
            tracing::debug!(
                ?old,
                new = scale,
                points = rig.model.points().len(),
                shapes = rig.model.shapes().len(),
                "rebuilt puppet model"
            );
            self.rig = Some(rig);
        }
        let Some(rig) = self.rig.as_mut() else {
            return Err(PuppetError::render("puppet model missing after rebuild"));
        };

        let Rig {
            proportions,
            model,
            skeleton,
            ..
        } = rig;
        model.pose(x + width / 2.0, y + height, |m| {
            pose::apply(skeleton, proportions, &channels, m);
        });

        let config = &self.config;
        let outline = config.outline_color;
        let pupil = config.pupil();
        let mut g = Graphics::new(canvas);
        model.draw(|shape, points| {
            let fill = config.fill_color(shape.color);
            match shape.kind() {
                ShapeKind::Capsule => capsule::draw(shape, points, &mut g, fill, outline),
                ShapeKind::Feature(feature) => {
                    let style = FeatureStyle {
                        fill,
                        outline,
                        pupil,
                    };
                    feature.draw(shape, points, &mut g, &channels, &style);
                }
            }
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/puppet.rs"]
mod tests;
