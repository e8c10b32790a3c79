//! Generation history records.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::render_style::RenderStyle;

/// Kind of artifact a history item records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Image,
    Video,
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryKind::Image => write!(f, "image"),
            HistoryKind::Video => write!(f, "video"),
        }
    }
}

/// A retained record of one past successful generation.
///
/// Created on success and never mutated afterwards; destroyed only by
/// eviction from the bounded store or by clearing the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub kind: HistoryKind,
    /// The user prompt that produced the artifact.
    pub prompt: String,
    /// Render style key active when the artifact was produced.
    pub style: String,
    /// Thumbnail / source image data URL.
    pub image_url: String,
    /// Final artifact location (image data URL or local video path).
    pub output_url: String,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
}

impl HistoryItem {
    /// Create a new history item stamped with a fresh id and the current time.
    pub fn new(
        kind: HistoryKind,
        prompt: impl Into<String>,
        style: RenderStyle,
        image_url: impl Into<String>,
        output_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            prompt: prompt.into(),
            style: style.to_string(),
            image_url: image_url.into(),
            output_url: output_url.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_item_new() {
        let item = HistoryItem::new(
            HistoryKind::Image,
            "A modern villa",
            RenderStyle::Photorealistic,
            "data:image/png;base64,AAAA",
            "data:image/png;base64,AAAA",
        );
        assert_eq!(item.kind, HistoryKind::Image);
        assert_eq!(item.style, "photorealistic");
        assert!(!item.id.is_empty());
        assert!(item.timestamp > 0);
    }

    #[test]
    fn test_history_item_serde_roundtrip() {
        let item = HistoryItem::new(
            HistoryKind::Video,
            "p",
            RenderStyle::Blueprint,
            "img",
            "/tmp/out.mp4",
        );
        let json = serde_json::to_string(&item).unwrap();
        let back: HistoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }
}
