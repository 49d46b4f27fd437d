//! JSON-backed record store.
//!
//! Each slot is one file under the base directory holding a pretty-printed
//! JSON array. Loading never fails: a missing file is an empty list, and a
//! corrupted or unreadable file is reported as a warning next to an empty
//! list so the caller can carry on fresh. Saving rewrites the whole file.

use crate::config::StorageConfig;
use crate::error::StoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of [`RecordStore::load`]: the records plus any recovered failure.
#[derive(Debug)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    /// Set when the slot existed but could not be read or parsed.
    pub warning: Option<StoreError>,
}

impl<T> Loaded<T> {
    fn ok(records: Vec<T>) -> Self {
        Self {
            records,
            warning: None,
        }
    }

    fn recovered(warning: StoreError) -> Self {
        Self {
            records: Vec::new(),
            warning: Some(warning),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Persists ordered record lists as JSON files under a base directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    base_dir: PathBuf,
    indent: usize,
}

impl RecordStore {
    pub fn new(base_dir: impl Into<PathBuf>, indent: usize) -> Self {
        Self {
            base_dir: base_dir.into(),
            indent,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.data_dir, config.indent)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Backing file of a slot.
    pub fn path_for(&self, slot: &str) -> PathBuf {
        self.base_dir.join(slot)
    }

    /// Load a slot, recovering from any failure with an empty list.
    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> Loaded<T> {
        match self.try_load(slot) {
            Ok(records) => Loaded::ok(records),
            Err(e) => {
                if e.is_corrupt() {
                    warn!(slot, error = %e, "Record file is corrupted, starting fresh");
                } else {
                    warn!(slot, error = %e, "Error loading record file, starting fresh");
                }
                Loaded::recovered(e)
            }
        }
    }

    /// Load a slot, returning the typed failure instead of recovering.
    ///
    /// A missing or blank file is `Ok` with no records.
    pub fn try_load<T: DeserializeOwned>(&self, slot: &str) -> Result<Vec<T>, StoreError> {
        let path = self.path_for(slot);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No record file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<T> =
            serde_json::from_str(&content).map_err(|e| StoreError::corrupt(&path, e))?;
        debug!(path = %path.display(), count = records.len(), "Loaded records");
        Ok(records)
    }

    /// Overwrite a slot with `records`, creating the base directory if needed.
    pub fn save<T: Serialize>(&self, slot: &str, records: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_dir).map_err(|e| StoreError::io(&self.base_dir, e))?;

        let path = self.path_for(slot);
        let encoded = self.encode(records)?;
        fs::write(&path, encoded).map_err(|e| StoreError::io(&path, e))?;
        debug!(path = %path.display(), count = records.len(), "Saved records");
        Ok(())
    }

    fn encode<T: Serialize>(&self, records: &[T]) -> Result<Vec<u8>, StoreError> {
        let indent = vec![b' '; self.indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser).map_err(StoreError::Encode)?;
        Ok(buf)
    }
}
