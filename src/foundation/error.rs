use crate::foundation::core::Size;

/// Convenience result type used across fadeframe.
pub type FadeResult<T> = Result<T, FadeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only construction-time operations fail. Playback and rendering are total.
#[derive(thiserror::Error, Debug)]
pub enum FadeError {
    /// Source images of one transition differ in width or height.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Size of the first source image.
        left: Size,
        /// Size of the second source image.
        right: Size,
    },

    /// A caller-supplied parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed or inconsistent transition configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FadeError {
    /// Build a [`FadeError::DimensionMismatch`] value.
    pub fn dimension_mismatch(left: Size, right: Size) -> Self {
        Self::DimensionMismatch { left, right }
    }

    /// Build a [`FadeError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`FadeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
