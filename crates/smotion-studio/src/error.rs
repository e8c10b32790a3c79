//! Orchestrator error types.

use thiserror::Error;

use smotion_gemini::GeminiError;
use smotion_storage::StorageError;

pub type StudioResult<T> = Result<T, StudioError>;

/// Errors from generation orchestration.
#[derive(Debug, Error)]
pub enum StudioError {
    /// Local input validation failed; no API call was made.
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Response for {view} view is not a valid SVG document: {detail}")]
    InvalidSvg { view: String, detail: String },

    #[error("Operation cancelled")]
    Cancelled,

    #[error(transparent)]
    Gemini(#[from] GeminiError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StudioError {
    pub fn missing_input(what: impl Into<String>) -> Self {
        Self::MissingInput(what.into())
    }

    /// Whether the underlying failure was quota exhaustion.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, StudioError::Gemini(e) if e.is_quota_exceeded())
    }
}
