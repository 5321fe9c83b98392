//! File-backed best-score storage.
//!
//! Scores live in a small JSON object of string keys. The best score sits under
//! [`BEST_SCORE_KEY`] as a non-negative integer written as text:
//!
//! ```text
//! {"lowestGuesses":"24"}
//! ```
//!
//! A missing file or key means "no best yet". Unreadable or corrupt files are
//! logged and treated the same way; the game never sees a storage error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use tui_pairs_core::score::{improves_on, ScoreStore};
use tui_pairs_core::types::BEST_SCORE_KEY;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access score file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score file {} is not a JSON object: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("stored best score {raw} is not a non-negative integer")]
    InvalidValue { raw: String },
}

#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored keys. A missing file is an empty store.
    pub fn read_entries(&self) -> Result<Map<String, Value>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    pub fn load_best(&self) -> Result<Option<u32>, StoreError> {
        let entries = self.read_entries()?;
        entries.get(BEST_SCORE_KEY).map(parse_score).transpose()
    }

    /// Write `turns` as the best score, keeping any other keys in the file.
    pub fn save_best(&self, turns: u32) -> Result<(), StoreError> {
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "replacing unreadable score file");
            Map::new()
        });
        entries.insert(BEST_SCORE_KEY.to_string(), Value::String(turns.to_string()));

        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let text = Value::Object(entries).to_string();
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

fn parse_score(value: &Value) -> Result<u32, StoreError> {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<u32>().ok(),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    };
    parsed.ok_or_else(|| StoreError::InvalidValue {
        raw: value.to_string(),
    })
}

impl ScoreStore for FileScoreStore {
    fn get_best(&self) -> Option<u32> {
        match self.load_best() {
            Ok(best) => best,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored best score");
                None
            }
        }
    }

    fn set_best(&mut self, turns: u32) -> bool {
        if !improves_on(self.get_best(), turns) {
            return false;
        }
        match self.save_best(turns) {
            Ok(()) => {
                tracing::debug!(turns, path = %self.path.display(), "best score saved");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "best score not persisted");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileScoreStore {
        FileScoreStore::new(dir.path().join("scores.json"))
    }

    #[test]
    fn test_missing_file_means_no_best() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load_best().unwrap(), None);
        assert_eq!(store.get_best(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(store.set_best(24));
        assert_eq!(store.get_best(), Some(24));

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"{"lowestGuesses":"24"}"#);
    }

    #[test]
    fn test_higher_score_not_written() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.set_best(20);
        assert!(!store.set_best(20));
        assert!(!store.set_best(32));
        assert_eq!(store.get_best(), Some(20));
        assert!(store.set_best(16));
        assert_eq!(store.get_best(), Some(16));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = FileScoreStore::new(dir.path().join("a/b/scores.json"));
        assert!(store.set_best(30));
        assert_eq!(FileScoreStore::new(store.path()).get_best(), Some(30));
    }

    #[test]
    fn test_corrupt_file_degrades_to_no_best() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        fs::write(store.path(), "not json at all").unwrap();

        assert!(matches!(store.load_best(), Err(StoreError::Corrupt { .. })));
        assert_eq!(store.get_best(), None);

        // The next finished game replaces the broken file.
        assert!(store.set_best(40));
        assert_eq!(store.get_best(), Some(40));
    }

    #[test]
    fn test_non_numeric_value_degrades_to_no_best() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"lowestGuesses":"lots"}"#).unwrap();

        assert!(matches!(
            store.load_best(),
            Err(StoreError::InvalidValue { .. })
        ));
        assert_eq!(store.get_best(), None);
    }

    #[test]
    fn test_numeric_value_and_other_keys_kept() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        fs::write(store.path(), r#"{"lowestGuesses":28,"theme":"dark"}"#).unwrap();

        assert_eq!(store.get_best(), Some(28));
        assert!(store.set_best(26));

        let entries = store.read_entries().unwrap();
        assert_eq!(entries["lowestGuesses"], Value::String("26".into()));
        assert_eq!(entries["theme"], Value::String("dark".into()));
    }

    #[test]
    fn test_empty_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "  \n").unwrap();
        assert_eq!(store.load_best().unwrap(), None);
    }
}
