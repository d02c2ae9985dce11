/// Convenience result type used across marionette.
pub type PuppetResult<T> = Result<T, PuppetError>;

/// Top-level error taxonomy used by library APIs.
///
/// Pose operators and the capsule renderer are infallible; errors only arise at the
/// edges where user-supplied data (channel maps, configuration, surface sizes) enters.
#[derive(thiserror::Error, Debug)]
pub enum PuppetError {
    /// Invalid user-provided configuration or call arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed channel values or channel maps.
    #[error("channel error: {0}")]
    Channel(String),

    /// Errors raised by a drawing surface backend.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PuppetError {
    /// Build a [`PuppetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PuppetError::Channel`] value.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Build a [`PuppetError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PuppetError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PuppetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
