use crate::{
    foundation::core::{BezPath, Rgba8},
    render::graphics::Canvas2d,
};

/// One primitive call received by a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Stroke {
        path: BezPath,
        width: f64,
        color: Rgba8,
    },
    Fill {
        path: BezPath,
        color: Rgba8,
    },
}

impl DrawCommand {
    pub fn path(&self) -> &BezPath {
        match self {
            Self::Stroke { path, .. } | Self::Fill { path, .. } => path,
        }
    }

    pub fn color(&self) -> Rgba8 {
        match self {
            Self::Stroke { color, .. } | Self::Fill { color, .. } => *color,
        }
    }

    /// Stroke width, `None` for fills.
    pub fn width(&self) -> Option<f64> {
        match self {
            Self::Stroke { width, .. } => Some(*width),
            Self::Fill { .. } => None,
        }
    }

    pub fn is_stroke(&self) -> bool {
        matches!(self, Self::Stroke { .. })
    }
}

/// [`Canvas2d`] that keeps every call in order instead of rasterizing.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn to_json_pretty(&self) -> crate::PuppetResult<String> {
        Ok(serde_json::to_string_pretty(&self.commands)?)
    }
}

impl Canvas2d for RecordingCanvas {
    fn stroke(&mut self, path: &BezPath, width: f64, color: Rgba8) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            width,
            color,
        });
    }

    fn fill(&mut self, path: &BezPath, color: Rgba8) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            color,
        });
    }
}
