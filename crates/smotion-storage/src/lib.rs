//! Local persistence for the SketchMotion backend.
//!
//! This crate provides:
//! - The bounded generation history store (JSON file, 12 items max)
//! - Persisted UI preferences (language and theme)

pub mod error;
pub mod history;
pub mod preferences;

pub use error::{StorageError, StorageResult};
pub use history::{HistoryStore, MAX_HISTORY_ITEMS};
pub use preferences::Preferences;
