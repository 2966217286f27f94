//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid operation id '{0}': must be a non-empty identifier")]
    InvalidOperationId(String),

    #[error("Operation '{operation_id}' declares status code {status_code} more than once")]
    DuplicateStatusCode {
        operation_id: String,
        status_code: String,
    },

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid parameter location: {0}")]
    InvalidParameterLocation(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Formatting error: {0}")]
    FormattingError(String),

    #[error("Operation loading error: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
