/// Convenience result type used across tapita.
pub type TapitaResult<T> = Result<T, TapitaError>;

/// Top-level error taxonomy. Each variant names the stage that failed.
#[derive(thiserror::Error, Debug)]
pub enum TapitaError {
    /// Invalid request or configuration. Raised before any drawing work.
    #[error("validation error: {0}")]
    Validation(String),

    /// The artwork could not be fetched or decoded.
    #[error("artwork fetch failed: {0}")]
    Fetch(String),

    /// Font loading, shaping or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// The rendered cover could not be persisted.
    #[error("output error: {0}")]
    Output(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TapitaError {
    /// Build a [`TapitaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TapitaError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`TapitaError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TapitaError::Output`] value.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
