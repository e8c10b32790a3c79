//! Persisted UI preferences (language and theme).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::warn;

use smotion_models::{Language, Theme};

use crate::error::StorageResult;

/// Session preferences persisted across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: Theme,
}

impl Preferences {
    /// Load preferences from a file, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Failed to parse preferences {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist preferences atomically.
    pub fn save(&self, path: impl Into<PathBuf>) -> StorageResult<()> {
        let path = path.into();
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;
        let tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&tmp, self)?;
        tmp.persist(&path)?;
        Ok(())
    }
}
