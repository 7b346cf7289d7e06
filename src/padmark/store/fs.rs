use super::KeyValueStore;
use crate::error::{PadmarkError, Result};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "data.json";

/// Durable file-backed storage: a single JSON map in `data.json` under the
/// store's root directory. Small by construction (one note plus flags), so
/// the whole map is re-read and re-written per operation.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// A store in the platform's standard data directory.
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "padmark", "padmark").ok_or_else(|| {
            PadmarkError::Store("Could not resolve a data directory".to_string())
        })?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn load_map(&self) -> Result<HashMap<String, String>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&path).map_err(PadmarkError::Io)?;
        let map = serde_json::from_str(&content).map_err(PadmarkError::Serialization)?;
        Ok(map)
    }

    fn save_map(&self, map: &HashMap<String, String>) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PadmarkError::Io)?;
        }

        let content = serde_json::to_string_pretty(map).map_err(PadmarkError::Serialization)?;
        fs::write(self.data_path(), content).map_err(PadmarkError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load_map()?;
        map.insert(key.to_string(), value.to_string());
        self.save_map(&map)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut map = self.load_map()?;
        if map.remove(key).is_some() {
            self.save_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_from_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store"));
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory_and_persists() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("store");
        let mut store = FileStore::new(root.clone());

        store.set("note", "hello").unwrap();

        // A fresh store over the same root sees the value.
        let reopened = FileStore::new(root);
        assert_eq!(reopened.get("note").unwrap(), Some("hello".to_string()));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();

        let reopened = FileStore::new(dir.path().to_path_buf());
        assert_eq!(reopened.get("k").unwrap(), None);
    }

    #[test]
    fn test_multiple_keys_coexist() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));
        assert_eq!(store.get("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_corrupt_data_file_propagates() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DATA_FILENAME), "not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.get("k"),
            Err(PadmarkError::Serialization(_))
        ));
    }
}
