use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

const STORAGE_DIR: &str = "puck_terminal";
const STORAGE_FILE: &str = "storage.json";

/// Key-value persistence port for the client-side stores. Last write wins;
/// there is no cross-process synchronization.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        (**self).set_item(key, value)
    }
}

/// File-backed storage: a single JSON map under the user cache dir,
/// rewritten atomically on every set. An unreadable or unparseable file is
/// treated as empty.
pub struct FileStorage {
    path: Option<PathBuf>,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    pub fn open_default() -> Self {
        Self::open(storage_path())
    }

    /// `None` keeps entries in memory only, for environments without a
    /// resolvable cache dir.
    pub fn open(path: Option<PathBuf>) -> Self {
        let entries = path.as_deref().map(load_entries).unwrap_or_default();
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("storage lock poisoned")
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().expect("storage lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        if let Some(path) = &self.path {
            let _ = save_entries(path, &entries);
        }
    }
}

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("storage lock poisoned")
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

fn load_entries(path: &Path) -> HashMap<String, String> {
    let Ok(raw) = fs::read_to_string(path) else {
        return HashMap::new();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

fn save_entries(path: &Path, entries: &HashMap<String, String>) -> Result<()> {
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string(entries).context("serialize storage")?;
    fs::write(&tmp, json).context("write storage")?;
    fs::rename(&tmp, path).context("swap storage")?;
    Ok(())
}

fn storage_path() -> Option<PathBuf> {
    // Prefer XDG cache.
    if let Ok(base) = std::env::var("XDG_CACHE_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(STORAGE_DIR).join(STORAGE_FILE));
        }
    }
    // Fallback to ~/.cache on linux-like systems.
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(
        PathBuf::from(home)
            .join(".cache")
            .join(STORAGE_DIR)
            .join(STORAGE_FILE),
    )
}
