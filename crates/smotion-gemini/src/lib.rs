//! Gemini API client for the SketchMotion backend.
//!
//! Thin REST client over the Generative Language API covering the three
//! surfaces the studio uses:
//! - text generation (`generateContent` with text output)
//! - image generation (`generateContent` with image response modalities)
//! - long-running video generation (`predictLongRunning` + operation polling
//!   + artifact download)

pub mod client;
pub mod config;
pub mod error;
pub mod wire;

pub use client::{GeminiClient, VideoOperation};
pub use config::GeminiConfig;
pub use error::{GeminiError, GeminiResult};
