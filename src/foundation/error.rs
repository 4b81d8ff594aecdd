/// Convenience result type used across Safeframe.
pub type SafeframeResult<T> = Result<T, SafeframeError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum SafeframeError {
    /// Invalid user-provided geometry (zero screen dimensions and the like).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while resolving device models against a catalog.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SafeframeError {
    /// Build a [`SafeframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SafeframeError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`SafeframeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
