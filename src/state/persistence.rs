use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// File-backed key-value storage.
///
/// The file holds one JSON object. It is read once when opened and
/// rewritten on every change.
pub struct LocalStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl LocalStore {
    /// Open a store. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the value under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.values.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Store `value` under `key` and write the file. Nothing changes if the
    /// write fails.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let mut values = self.values.clone();
        values.insert(key.to_string(), serde_json::to_value(value)?);
        write_values(&self.path, &values)?;
        self.values = values;
        Ok(())
    }
}

fn write_values(path: &Path, values: &BTreeMap<String, Value>) -> Result<()> {
    let json = serde_json::to_string_pretty(values)?;
    fs::write(path, json)?;
    Ok(())
}
