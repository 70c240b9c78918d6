use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinRepError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Export error: {0}")]
    ExportError(String),
}

impl From<serde_json::Error> for FinRepError {
    fn from(e: serde_json::Error) -> Self {
        FinRepError::SerializationError(e.to_string())
    }
}
