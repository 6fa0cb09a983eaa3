/// Convenience result type used across choreo.
pub type ChoreoResult<T> = Result<T, ChoreoError>;

/// Top-level error taxonomy used by setup-time APIs.
///
/// The per-tick sampling path is total and never returns these; errors can
/// only arise while validating authored configuration at scene construction.
#[derive(thiserror::Error, Debug)]
pub enum ChoreoError {
    /// Invalid authored configuration data (bands, staggers, tables).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while assembling a scene from its configuration.
    #[error("scene error: {0}")]
    Scene(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChoreoError {
    /// Build a [`ChoreoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChoreoError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`ChoreoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
