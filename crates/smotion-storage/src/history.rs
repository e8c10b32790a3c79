//! Bounded, file-backed generation history.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::warn;

use smotion_models::HistoryItem;

use crate::error::StorageResult;

/// Maximum number of retained history items.
pub const MAX_HISTORY_ITEMS: usize = 12;

/// Persistent generation history, most recent first.
///
/// Backed by a single JSON file. The store holds at most
/// [`MAX_HISTORY_ITEMS`] items; pushing onto a full store evicts the oldest.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    items: Vec<HistoryItem>,
}

impl HistoryStore {
    /// Open a history store at the given path.
    ///
    /// A missing file yields an empty store. A file that fails to parse is
    /// treated as empty rather than blocking the session; the old content is
    /// overwritten on the next push.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<HistoryItem>>(&raw) {
                Ok(mut items) => {
                    items.truncate(MAX_HISTORY_ITEMS);
                    items
                }
                Err(e) => {
                    warn!("Failed to parse history file {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, items })
    }

    /// Items in most-recent-first order.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record a new item at the front, evicting beyond the cap, and persist.
    pub fn push(&mut self, item: HistoryItem) -> StorageResult<()> {
        self.items.insert(0, item);
        self.items.truncate(MAX_HISTORY_ITEMS);
        self.persist()
    }

    /// Remove all items and persist.
    pub fn clear(&mut self) -> StorageResult<()> {
        self.items.clear();
        self.persist()
    }

    /// Write the current items atomically (temp file + rename).
    fn persist(&self) -> StorageResult<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;
        let tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&tmp, &self.items)?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smotion_models::{HistoryKind, RenderStyle};

    fn item(prompt: &str) -> HistoryItem {
        HistoryItem::new(
            HistoryKind::Image,
            prompt,
            RenderStyle::Photorealistic,
            "data:image/png;base64,AAAA",
            "data:image/png;base64,BBBB",
        )
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(dir.path().join("history.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_push_prepends_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::open(&path).unwrap();
        store.push(item("first")).unwrap();
        store.push(item("second")).unwrap();
        assert_eq!(store.items()[0].prompt, "second");
        assert_eq!(store.items()[1].prompt, "first");

        let reloaded = HistoryStore::open(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.items()[0].prompt, "second");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path().join("history.json")).unwrap();

        for i in 0..MAX_HISTORY_ITEMS + 3 {
            store.push(item(&format!("prompt {}", i))).unwrap();
        }
        assert_eq!(store.len(), MAX_HISTORY_ITEMS);
        assert_eq!(store.items()[0].prompt, "prompt 14");
        assert_eq!(
            store.items().last().unwrap().prompt,
            format!("prompt {}", 3)
        );
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = HistoryStore::open(&path).unwrap();
        assert!(store.is_empty());
        store.push(item("fresh")).unwrap();

        let reloaded = HistoryStore::open(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut store = HistoryStore::open(&path).unwrap();
        store.push(item("a")).unwrap();
        store.clear().unwrap();
        assert!(store.is_empty());
        assert!(HistoryStore::open(&path).unwrap().is_empty());
    }
}
