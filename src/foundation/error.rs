/// Convenience result type used across Vantage.
pub type VantageResult<T> = Result<T, VantageError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum VantageError {
    /// Invalid user-provided configuration or object data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A handle or name did not resolve to a live object, surface, hitbox or timeline.
    #[error("lookup error: {0}")]
    Lookup(String),

    /// Errors while scheduling or driving timelines.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from collaborators.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VantageError {
    /// Build a [`VantageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VantageError::Lookup`] value.
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Build a [`VantageError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`VantageError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for absent-lookup conditions.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }
}

impl From<serde_json::Error> for VantageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
