use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};

use super::{KeyValueStore, StoreError};

/// File-backed store: one `<key>.json` document per key under a data
/// directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match fs::read(self.path_for(key)) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read stored value");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "stored value is corrupt, using defaults");
                None
            }
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        // Write through a temp file so a crash never leaves a torn value.
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }
}
