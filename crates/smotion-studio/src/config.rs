//! Orchestrator configuration.

use std::path::PathBuf;
use std::time::Duration;

use smotion_gemini::GeminiConfig;

use crate::error::StudioResult;

/// Studio configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Gemini API configuration
    pub gemini: GeminiConfig,
    /// Delay between video operation polls
    pub poll_interval: Duration,
    /// Directory where downloaded videos are written
    pub output_dir: PathBuf,
}

impl StudioConfig {
    /// Create a config with default poll interval and output directory.
    pub fn new(gemini: GeminiConfig) -> Self {
        Self {
            gemini,
            poll_interval: Duration::from_secs(10),
            output_dir: PathBuf::from("output"),
        }
    }

    /// Create config from environment variables, loading `.env` if present.
    pub fn from_env() -> StudioResult<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            gemini: GeminiConfig::from_env()?,
            poll_interval: Duration::from_secs(
                std::env::var("STUDIO_POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            output_dir: std::env::var("STUDIO_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output")),
        })
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
