//! Inline image payloads exchanged with the AI boundary.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Image formats accepted for upload.
pub const SUPPORTED_UPLOAD_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp"];

/// Errors produced while decoding or validating image payloads.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Invalid base64 image data: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Unsupported image type: {0}")]
    UnsupportedMimeType(String),

    #[error("Image payload is empty")]
    Empty,
}

/// One inline image: raw bytes plus a MIME type.
///
/// This is the only image representation that crosses the AI boundary;
/// data URLs are a presentation-layer encoding of the same payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl InlineImage {
    /// Create an inline image, rejecting empty payloads.
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Result<Self, ImageError> {
        if data.is_empty() {
            return Err(ImageError::Empty);
        }
        Ok(Self {
            data,
            mime_type: mime_type.into(),
        })
    }

    /// Create an inline image from an uploaded file, enforcing the supported
    /// upload formats (PNG/JPEG/WEBP).
    pub fn from_upload(data: Vec<u8>, mime_type: &str) -> Result<Self, ImageError> {
        if !SUPPORTED_UPLOAD_MIME_TYPES.contains(&mime_type) {
            return Err(ImageError::UnsupportedMimeType(mime_type.to_string()));
        }
        Self::new(data, mime_type)
    }

    /// Parse a `data:<mime>;base64,<payload>` URL.
    pub fn from_data_url(url: &str) -> Result<Self, ImageError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| ImageError::InvalidDataUrl(truncate_for_error(url)))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ImageError::InvalidDataUrl(truncate_for_error(url)))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| ImageError::InvalidDataUrl(truncate_for_error(url)))?;
        if mime_type.is_empty() {
            return Err(ImageError::InvalidDataUrl(truncate_for_error(url)));
        }
        let data = BASE64.decode(payload)?;
        Self::new(data, mime_type)
    }

    /// Encode as a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.data))
    }

    /// Base64 encoding of the raw bytes, as sent on the wire.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.data)
    }

    /// Whether the MIME type is any `image/*` type.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

fn truncate_for_error(url: &str) -> String {
    const MAX: usize = 48;
    // Truncate on a char boundary; the URL may carry multibyte text.
    match url.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &url[..idx]),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_roundtrip() {
        let image = InlineImage::new(vec![1, 2, 3, 4], "image/png").unwrap();
        let url = image.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));
        let back = InlineImage::from_data_url(&url).unwrap();
        assert_eq!(image, back);
    }

    #[test]
    fn test_invalid_data_urls() {
        assert!(InlineImage::from_data_url("http://example.com/a.png").is_err());
        assert!(InlineImage::from_data_url("data:image/png,notbase64header").is_err());
        assert!(InlineImage::from_data_url("data:;base64,AAAA").is_err());
        assert!(InlineImage::from_data_url("data:image/png;base64,!!!").is_err());
    }

    #[test]
    fn test_invalid_multibyte_data_url_errors_cleanly() {
        let url = format!("data:{}", "غ".repeat(40));
        assert!(matches!(
            InlineImage::from_data_url(&url),
            Err(ImageError::InvalidDataUrl(_))
        ));
    }

    #[test]
    fn test_upload_mime_enforcement() {
        assert!(InlineImage::from_upload(vec![0], "image/png").is_ok());
        assert!(InlineImage::from_upload(vec![0], "image/webp").is_ok());
        assert!(matches!(
            InlineImage::from_upload(vec![0], "image/gif"),
            Err(ImageError::UnsupportedMimeType(_))
        ));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            InlineImage::new(vec![], "image/png"),
            Err(ImageError::Empty)
        ));
    }
}
