/// Convenience result alias used across the crate.
pub type BannerResult<T> = Result<T, BannerError>;

/// Errors raised at the fallible edges of the banner: configuration, packing input, rendering
/// and encoding. Widget controls never fail.
#[derive(thiserror::Error, Debug)]
pub enum BannerError {
    /// Invalid input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// Frame sink / encoder failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BannerError {
    /// Build a [`BannerError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BannerError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BannerError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BannerError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BannerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}
