//! Engine error taxonomy. Validation problems are caller errors; schema and
//! model problems are service errors and are never converted into a default score.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Input field missing, out of declared bounds, or not a finite number.
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// The loaded model was trained on a different feature schema than the
    /// one the builder produces. Fatal before any inference.
    #[error("feature schema mismatch: builder produces '{expected}', model was trained on '{found}'")]
    SchemaMismatch { expected: String, found: String },

    /// No model is loaded. Surfaced explicitly instead of fabricating a score.
    #[error("no risk model loaded")]
    ModelUnavailable,

    /// The model's predict call failed.
    #[error("inference failed: {0}")]
    Inference(String),

    /// Malformed configuration (e.g. a threshold table with gaps or overlaps).
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("model load failed: {0}")]
    ModelLoad(#[from] ort::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("metadata parse failed: {0}")]
    Metadata(#[from] serde_json::Error),
}

impl EngineError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field,
            message: message.into(),
        }
    }
}
