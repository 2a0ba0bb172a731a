// Storage module - durable key-value records on disk
//
// Each key maps to one pretty-printed JSON file in the data directory:
//   <data_dir>/auth-store.json
//
// Writes go to a temporary sibling first and are renamed into place, so a
// crash mid-write never leaves a truncated record behind.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Key-value store backed by one JSON file per key
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open the store, creating its directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// File that holds the given key
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read a record. A key that was never written yields `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };

        let value = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(value))
    }

    /// Write a record, replacing any previous value
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(value).context("Failed to serialize record")?;
        fs::write(&tmp, json).with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to move record into {}", path.display()))?;

        tracing::trace!("Saved {}", path.display());
        Ok(())
    }
}

/// Unique scratch directory for tests that touch the filesystem
#[cfg(test)]
pub(crate) fn scratch_dir(label: &str) -> PathBuf {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};

    let random = RandomState::new().build_hasher().finish();
    std::env::temp_dir().join(format!(
        "topicdesk-{}-{}-{:08x}",
        label,
        std::process::id(),
        random & 0xFFFF_FFFF
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        count: u32,
    }

    #[test]
    fn test_missing_key_loads_none() {
        let storage = Storage::new(scratch_dir("missing")).unwrap();
        let loaded: Option<Record> = storage.load("nothing-here").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_from_fresh_handle() {
        let dir = scratch_dir("reopen");
        let record = Record {
            name: "x".to_string(),
            count: 3,
        };
        Storage::new(&dir).unwrap().save("rec", &record).unwrap();

        let reopened = Storage::new(&dir).unwrap();
        assert_eq!(reopened.load::<Record>("rec").unwrap(), Some(record));
        assert!(!reopened.path_for("rec").with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_record_is_an_error() {
        let storage = Storage::new(scratch_dir("corrupt")).unwrap();
        fs::write(storage.path_for("rec"), "{ not json").unwrap();
        assert!(storage.load::<Record>("rec").is_err());
    }
}
