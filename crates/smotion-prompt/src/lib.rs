//! Prompt assembly for the SketchMotion backend.
//!
//! This crate provides:
//! - The template library: fixed localized phrase fragments for every
//!   animation option axis
//! - The scene classifier: keyword-based interior/exterior detection
//! - The video prompt synthesizer: deterministic assembly of the full
//!   video-generation instruction
//! - Instruction templates for each AI capability (prompt generation,
//!   refinement, reports, elevation sketches, technical drawings, 3D views)

pub mod classifier;
pub mod instructions;
pub mod synthesizer;
pub mod templates;

pub use classifier::{classify, SceneClassification};
pub use synthesizer::build_video_prompt;
