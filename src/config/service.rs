//! The settings service: one committed `Settings` value shared by every
//! reader, written only through explicit updates and persisted on each write.

use crate::config::{Settings, merge_json};
use crate::config::store::SettingsStore;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::models::schedule::SchedulePatch;
use crossbeam_channel::{Receiver, Sender, unbounded};
use serde_json::Value;
use std::sync::{Mutex, RwLock};

pub struct SettingsService {
    store: Box<dyn SettingsStore>,
    current: RwLock<Settings>,
    watchers: Mutex<Vec<Sender<Settings>>>,
}

impl SettingsService {
    /// Load from `store`. Missing or unreadable data silently yields defaults.
    pub fn new<S: SettingsStore + 'static>(store: S) -> Self {
        let raw = store.load().ok().flatten();
        let settings = Settings::from_stored(raw.as_deref());

        Self {
            store: Box::new(store),
            current: RwLock::new(settings),
            watchers: Mutex::default(),
        }
    }

    /// Latest committed settings.
    pub fn current(&self) -> Settings {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Receive every committed value from now on.
    pub fn watch(&self) -> Receiver<Settings> {
        let (tx, rx) = unbounded();
        self.watchers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        rx
    }

    /// Apply `f`, commit, then persist. Returns the committed value.
    pub fn update<F>(&self, f: F) -> AppResult<Settings>
    where
        F: FnOnce(&mut Settings),
    {
        let committed = {
            let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
            f(&mut *guard);
            guard.clone()
        };
        self.notify(&committed);
        self.persist(&committed)?;
        Ok(committed)
    }

    pub fn update_schedule(&self, location: Location, patch: &SchedulePatch) -> AppResult<Settings> {
        self.update(|s| s.schedule_mut(location).apply(patch))
    }

    /// Merge a partial JSON object over the current settings.
    pub fn apply_patch(&self, patch: Value) -> AppResult<Settings> {
        if !patch.is_object() {
            return Err(AppError::Config("settings patch must be a JSON object".into()));
        }

        let mut merged = self.current().to_value();
        merge_json(&mut merged, patch);
        let next: Settings =
            serde_json::from_value(merged).map_err(|e| AppError::Config(e.to_string()))?;

        self.update(|s| *s = next)
    }

    pub fn reset(&self) -> AppResult<Settings> {
        self.update(|s| *s = Settings::default())
    }

    fn notify(&self, committed: &Settings) {
        let mut watchers = self.watchers.lock().unwrap_or_else(|e| e.into_inner());
        watchers.retain(|tx| tx.send(committed.clone()).is_ok());
    }

    fn persist(&self, settings: &Settings) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(settings)?;
        self.store.save(&raw)
    }
}
