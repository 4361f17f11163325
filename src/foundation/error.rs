/// Convenience result type used across the crate.
pub type FingersumResult<T> = Result<T, FingersumError>;

/// Operational failure (configuration, assets, rasterization, output).
///
/// User-facing input problems are not errors; they are reported as
/// [`crate::validate::Rejection`] values.
#[derive(thiserror::Error, Debug)]
pub enum FingersumError {
    /// Invalid configuration value or unreadable config file.
    #[error("config error: {0}")]
    Config(String),

    /// A photo could not be read or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Scene rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// A run could not be started from the current input.
    #[error("input error: {0}")]
    Input(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with context attached by the caller.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FingersumError {
    /// Build a [`FingersumError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FingersumError::Asset`].
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`FingersumError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FingersumError::Input`].
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`FingersumError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
