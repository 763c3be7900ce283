/// Convenience result type used across the crate.
pub type ZcResult<T> = Result<T, ZcError>;

/// Top-level error taxonomy.
///
/// Transient "not measured yet" states are not errors; they surface as a
/// not-ready [`crate::ResolvedPlacement`] instead.
#[derive(thiserror::Error, Debug)]
pub enum ZcError {
    /// Invalid user-provided values (anchors, dimensions, asset names).
    #[error("validation error: {0}")]
    Validation(String),

    /// Site configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Asset lookup or inspection failed.
    #[error("asset error: {0}")]
    Asset(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZcError {
    /// Build a [`ZcError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ZcError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ZcError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
