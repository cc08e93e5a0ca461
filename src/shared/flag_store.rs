use super::errors::FlagStoreError;
use super::fs_atomic::atomic_write_file;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Persistent key-value flags shared with other pages of the application.
pub trait FlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError>;
}

/// Flags kept as one JSON object on disk, rewritten atomically on each set.
#[derive(Debug, Clone)]
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, FlagStoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|source| FlagStoreError::Read {
            path: self.path.display().to_string(),
            source,
        })?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| FlagStoreError::Parse {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl FlagStore for FileFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        let body =
            serde_json::to_vec_pretty(&values).map_err(|source| FlagStoreError::Encode {
                path: self.path.display().to_string(),
                source,
            })?;
        atomic_write_file(&self.path, &body).map_err(|source| FlagStoreError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    values: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
