//! Error types for HTML rendering.

use thiserror::Error;

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering an object to HTML.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The input could not be serialized for traversal.
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The input nests deeper than the configured limit.
    #[error("value nests deeper than the configured limit ({limit} levels)")]
    DepthLimitExceeded { limit: usize },
}
