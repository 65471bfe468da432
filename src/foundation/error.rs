pub type MotionResult<T> = Result<T, MotionError>;

#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// The requested preset id is not part of the registry.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    /// An imported parameter envelope is missing required fields or has the wrong shape.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    pub fn unknown_preset(id: impl Into<String>) -> Self {
        Self::UnknownPreset(id.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedEnvelope(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
