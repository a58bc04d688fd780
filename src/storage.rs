//! Session stores
//!
//! `JsonFileStore` keeps the session as pretty-printed JSON on disk, written to
//! a temporary sibling first and renamed into place so a crash never leaves a
//! half-written save. `MemoryStore` keeps it in memory for tests and for the
//! engine audit.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::game::{Session, SessionStore};

/// Session saved as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileStore {
    fn persist(&mut self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(session)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })
    }
}

/// Session kept in memory, counting how often it was saved
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<Session>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts out holding `session`
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            saved: Some(session),
            saves: 0,
        }
    }

    #[must_use]
    pub fn saved(&self) -> Option<&Session> {
        self.saved.as_ref()
    }

    /// Number of `persist` calls so far
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SessionStore for MemoryStore {
    fn persist(&mut self, session: &Session) -> Result<(), StoreError> {
        self.saved = Some(session.clone());
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.saved.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameOptions;

    fn sample() -> Session {
        Session {
            secret: "CRANE".to_string(),
            guesses: vec!["SLATE".to_string(), "TRAIN".to_string()],
            options: GameOptions {
                word_length: 5,
                hard_mode: true,
            },
            shared: true,
            elapsed_seconds: 75,
        }
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("session.json"));

        assert!(store.load().unwrap().is_none());
        store.persist(&sample()).unwrap();

        assert_eq!(store.load().unwrap(), Some(sample()));
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("session.json"));
        store.persist(&sample()).unwrap();

        let mut next = sample();
        next.guesses.push("CRANE".to_string());
        store.persist(&next).unwrap();

        assert_eq!(store.load().unwrap().unwrap().guesses.len(), 3);
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains("session.json"));
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        store.persist(&sample()).unwrap();
        store.persist(&sample()).unwrap();

        assert_eq!(store.saves(), 2);
        assert_eq!(store.load().unwrap(), Some(sample()));
    }
}
