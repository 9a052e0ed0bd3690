use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Key-value store behind the theme controller. Injected so the controller
/// never touches ambient global state directly.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Persists each preference as a small file under the user config directory.
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("could not determine config directory"))?
            .join("smartjobs");
        Ok(Self { dir })
    }

    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key))
            .ok()
            .map(|value| value.trim().to_string())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryPreferenceStore::default();
        assert_eq!(store.get("theme"), None);

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FilePreferenceStore::with_dir(dir.path().join("prefs"));

        assert_eq!(store.get("theme"), None);
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_trims_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = dir.path().join("prefs");
        fs::create_dir_all(&prefs).unwrap();
        fs::write(prefs.join("theme"), "light\n").unwrap();

        let store = FilePreferenceStore::with_dir(prefs);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }
}
