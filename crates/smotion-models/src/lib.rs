//! Shared data models for the SketchMotion backend.
//!
//! This crate provides Serde-serializable types for:
//! - Animation options (length, movement, speed, tilt)
//! - Render styles and their localized prompt prefixes
//! - Generation history items
//! - 3D model views and elevation sketch sets
//! - Inline image payloads for the AI boundary
//! - Static preset tables (video styles, style keywords, scene prompts)

pub mod animation;
pub mod history;
pub mod image;
pub mod language;
pub mod presets;
pub mod render_style;
pub mod views;

// Re-export common types
pub use animation::{
    AnimationLength, AnimationOptions, CameraMovement, CameraSpeed, CameraTilt,
};
pub use history::{HistoryItem, HistoryKind};
pub use image::{ImageError, InlineImage};
pub use language::{Language, Theme};
pub use presets::{ScenePreset, StylePreset, VideoStylePreset};
pub use render_style::RenderStyle;
pub use views::{ElevationSketchSet, ElevationView, ModelViews, ViewAngle};
