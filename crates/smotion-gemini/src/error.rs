//! Gemini client error types.

use thiserror::Error;

pub type GeminiResult<T> = Result<T, GeminiError>;

/// Errors from the Gemini API client.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY not set")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Daily/minute generation quota exhausted. Kept distinct from [`Api`]
    /// so callers can surface an actionable message instead of a generic
    /// failure.
    #[error("Gemini API quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("no text content in Gemini response")]
    NoText,

    #[error("no image content in Gemini response: {0}")]
    NoImage(String),

    #[error("video operation failed: {0}")]
    OperationFailed(String),

    #[error("video operation completed without a download link")]
    MissingDownloadLink,

    #[error("video download failed with status {status}: {message}")]
    DownloadFailed { status: u16, message: String },

    #[error("invalid image payload: {0}")]
    InvalidImage(#[from] smotion_models::ImageError),

    #[error("invalid download URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl GeminiError {
    /// Classify an API error body, promoting quota exhaustion to its own
    /// variant. The API signals quota both via HTTP 429 and via a
    /// `RESOURCE_EXHAUSTED` status string in the error body.
    pub fn from_api_response(status: u16, body: String) -> Self {
        if status == 429 || body.contains("RESOURCE_EXHAUSTED") {
            GeminiError::QuotaExceeded(body)
        } else {
            GeminiError::Api {
                status,
                message: body,
            }
        }
    }

    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, GeminiError::QuotaExceeded(_))
    }
}
