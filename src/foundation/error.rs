/// Convenience result type used across Flowlines.
pub type FlowResult<T> = Result<T, FlowError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The render loop itself has no fatal error class: exhausted placement
/// attempts and degenerate geometry are handled locally during seeding and
/// stroking. These variants cover construction-time validation and explicit
/// mutation APIs only.
#[derive(thiserror::Error, Debug)]
pub enum FlowError {
    /// Invalid user-provided layout or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid access to the parameter table (unknown control name).
    #[error("parameter error: {0}")]
    Parameter(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlowError {
    /// Build a [`FlowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlowError::Parameter`] value.
    pub fn parameter(msg: impl Into<String>) -> Self {
        Self::Parameter(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
