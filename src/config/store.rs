//! I/O ports for settings persistence.

use crate::errors::AppResult;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Raw key-value storage for the serialized settings object.
pub trait SettingsStore: Send + Sync {
    /// Stored JSON, or `None` when nothing has been saved yet.
    fn load(&self) -> AppResult<Option<String>>;

    fn save(&self, raw: &str) -> AppResult<()>;
}

/// Settings kept in a JSON file (created on first save).
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, raw: &str) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            data: Mutex::new(initial.map(str::to_string)),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.data.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(self.contents())
    }

    fn save(&self, raw: &str) -> AppResult<()> {
        *self.data.lock().unwrap_or_else(|e| e.into_inner()) = Some(raw.to_string());
        Ok(())
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<T> {
    fn load(&self) -> AppResult<Option<String>> {
        (**self).load()
    }

    fn save(&self, raw: &str) -> AppResult<()> {
        (**self).save(raw)
    }
}
