/// Convenience result type used across the crate.
pub type KenBurnsResult<T> = Result<T, KenBurnsError>;

/// Error taxonomy for geometry, generation and engine configuration.
#[derive(thiserror::Error, Debug)]
pub enum KenBurnsError {
    /// A scale mode other than center-crop or fit-center was requested.
    #[error("unsupported scale mode '{0}' (only CENTER_CROP and FIT_CENTER are supported)")]
    UnsupportedScaleMode(String),

    /// A rect with non-positive or non-finite extent reached geometry code.
    #[error("degenerate rect: width={width}, height={height}")]
    DegenerateRect {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },

    /// The random generator ran out of attempts looking for a distinct rect pair.
    #[error("transition generator exhausted after {attempts} attempts")]
    GeneratorExhausted {
        /// Number of attempts made.
        attempts: u32,
    },

    /// Invalid configuration or generator output.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KenBurnsError {
    /// Build a [`KenBurnsError::UnsupportedScaleMode`] value.
    pub fn unsupported_scale_mode(name: impl Into<String>) -> Self {
        Self::UnsupportedScaleMode(name.into())
    }

    /// Build a [`KenBurnsError::DegenerateRect`] value.
    pub fn degenerate_rect(width: f64, height: f64) -> Self {
        Self::DegenerateRect { width, height }
    }

    /// Build a [`KenBurnsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KenBurnsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for KenBurnsError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
