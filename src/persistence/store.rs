//! Save storage backends

use std::io::ErrorKind;
use std::path::PathBuf;

use super::{PersistenceError, SaveRecord};

/// Somewhere a save record can be read from and written to (synchronously)
pub trait SaveStore {
    fn load(&self) -> Result<SaveRecord, PersistenceError>;
    fn save(&mut self, record: &SaveRecord) -> Result<(), PersistenceError>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self) -> Result<SaveRecord, PersistenceError> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PersistenceError::Missing,
            _ => PersistenceError::Io(e),
        })?;
        SaveRecord::from_json(&json)
    }

    fn save(&mut self, record: &SaveRecord) -> Result<(), PersistenceError> {
        let json = record.to_json()?;
        // Write beside the target then rename so a crash never leaves half a save
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory store for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<SaveRecord>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn with_record(record: SaveRecord) -> Self {
        Self {
            record: Some(record),
            ..Self::default()
        }
    }

    /// A store whose writes always fail
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Number of successful saves
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Result<SaveRecord, PersistenceError> {
        self.record.clone().ok_or(PersistenceError::Missing)
    }

    fn save(&mut self, record: &SaveRecord) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Io(std::io::Error::new(
                ErrorKind::PermissionDenied,
                "writes disabled",
            )));
        }
        self.record = Some(record.clone());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CharacterId;

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("save.json"));
        assert!(matches!(store.load(), Err(PersistenceError::Missing)));

        let record = SaveRecord {
            permanent_currency: 340,
            owned_characters: vec![CharacterId::Torcher, CharacterId::Dynamiter],
            selected_character: CharacterId::Dynamiter,
        };
        store.save(&record).unwrap();
        assert_eq!(store.load().unwrap(), record);
        assert!(!dir.path().join("save.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, "{\"permanent_currency\": 10,").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(PersistenceError::Parse(_))));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nope").join("save.json"));
        assert!(matches!(
            store.save(&SaveRecord::default()),
            Err(PersistenceError::Io(_))
        ));
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryStore::default();
        store.save(&SaveRecord::default()).unwrap();
        assert_eq!(store.writes(), 1);
        assert_eq!(store.load().unwrap(), SaveRecord::default());
    }
}
