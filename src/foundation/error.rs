/// Convenience result type used across frameloom.
pub type FrameloomResult<T> = Result<T, FrameloomError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum FrameloomError {
    /// Malformed configuration data: unsorted breakpoints, mismatched range
    /// lengths, non-contiguous phases, bad scenario shape. Fatal for the
    /// render job; indicates an authoring bug, not a transient condition.
    #[error("config error: {0}")]
    Config(String),

    /// Non-positive container dimensions handed to the layout solver.
    /// Fatal for the offending element only; the composer skips it.
    #[error("invalid layout bounds: {0}")]
    InvalidLayoutBounds(String),

    /// A computed layout breaches a declared safe-zone boundary. Fatal by
    /// design: the engine refuses to render unsafe layouts.
    #[error("safe zone violation: {0}")]
    SafeZone(String),

    /// Errors while evaluating timeline state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FrameloomError {
    /// Build a [`FrameloomError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FrameloomError::InvalidLayoutBounds`] value.
    pub fn layout_bounds(msg: impl Into<String>) -> Self {
        Self::InvalidLayoutBounds(msg.into())
    }

    /// Build a [`FrameloomError::SafeZone`] value.
    pub fn safe_zone(msg: impl Into<String>) -> Self {
        Self::SafeZone(msg.into())
    }

    /// Build a [`FrameloomError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`FrameloomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            FrameloomError::config("x")
                .to_string()
                .contains("config error:")
        );
        assert!(
            FrameloomError::layout_bounds("x")
                .to_string()
                .contains("invalid layout bounds:")
        );
        assert!(
            FrameloomError::safe_zone("x")
                .to_string()
                .contains("safe zone violation:")
        );
        assert!(
            FrameloomError::evaluation("x")
                .to_string()
                .contains("evaluation error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = FrameloomError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
