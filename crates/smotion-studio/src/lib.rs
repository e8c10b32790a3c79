//! Generation orchestration for the SketchMotion backend.
//!
//! This crate provides:
//! - [`Studio`]: one async operation per AI capability (prompt generation,
//!   refinement, render variants, video animation, reports, elevation
//!   sketches, technical drawings, 3D model views)
//! - [`CancelSignal`]: cooperative cancellation for the video poll loop
//! - History recording helpers for successful generations

pub mod cancel;
pub mod config;
pub mod error;
pub mod history;
pub mod studio;
pub mod svg;

pub use cancel::CancelSignal;
pub use config::StudioConfig;
pub use error::{StudioError, StudioResult};
pub use history::{record_image_generation, record_video_generation};
pub use studio::Studio;
