use crate::models::location::Location;
use crate::models::schedule::{ClockTime, WorkSchedule};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub mod check;
pub mod service;
pub mod store;

pub use service::SettingsService;
pub use store::{FileStore, MemoryStore, SettingsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    /// Resolve `System` from the terminal's `COLORFGBG` ("fg;bg") hint.
    pub fn resolve(self) -> Theme {
        match self {
            Theme::System => match env::var("COLORFGBG") {
                Ok(v) => Self::from_colorfgbg(&v),
                Err(_) => Theme::Light,
            },
            other => other,
        }
    }

    pub fn from_colorfgbg(value: &str) -> Theme {
        match value.rsplit(';').next().and_then(|bg| bg.trim().parse::<u8>().ok()) {
            Some(bg) if bg < 7 || bg == 8 => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UpdateFrequency {
    /// Refresh once a minute
    Standard,
    /// Refresh every second
    Smooth,
}

impl UpdateFrequency {
    pub fn interval(self) -> Duration {
        match self {
            UpdateFrequency::Standard => Duration::from_secs(60),
            UpdateFrequency::Smooth => Duration::from_secs(1),
        }
    }
}

/// User-editable settings, persisted as one JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub ireland_schedule: WorkSchedule,
    pub pune_schedule: WorkSchedule,
    #[serde(rename = "use24Hour")]
    pub use_24_hour: bool,
    pub show_seconds: bool,
    pub theme: Theme,
    pub update_frequency: UpdateFrequency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ireland_schedule: WorkSchedule {
                start_time: ClockTime::at(9, 0),
                lunch_start: ClockTime::at(13, 0),
                lunch_end: ClockTime::at(14, 0),
                end_time: ClockTime::at(17, 30),
            },
            pune_schedule: WorkSchedule {
                start_time: ClockTime::at(12, 0),
                lunch_start: ClockTime::at(16, 0),
                lunch_end: ClockTime::at(17, 0),
                end_time: ClockTime::at(21, 0),
            },
            use_24_hour: true,
            show_seconds: false,
            theme: Theme::Light,
            update_frequency: UpdateFrequency::Standard,
        }
    }
}

impl Settings {
    pub fn schedule(&self, location: Location) -> &WorkSchedule {
        match location {
            Location::Ireland => &self.ireland_schedule,
            Location::Pune => &self.pune_schedule,
        }
    }

    pub fn schedule_mut(&mut self, location: Location) -> &mut WorkSchedule {
        match location {
            Location::Ireland => &mut self.ireland_schedule,
            Location::Pune => &mut self.pune_schedule,
        }
    }

    /// Build settings from stored JSON: absent or corrupt data yields the
    /// defaults, stored fields are merged over the defaults one by one and an
    /// ill-typed field keeps its default.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let Ok(Value::Object(stored)) = serde_json::from_str::<Value>(raw) else {
            return Self::default();
        };

        let (merged, _) = merge_stored(stored);
        serde_json::from_value(merged).unwrap_or_default()
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Deep merge `patch` into `base`, object by object. `null` leaves the base value.
pub fn merge_json(base: &mut Value, patch: Value) {
    match (base, patch) {
        (_, Value::Null) => {}
        (Value::Object(b), Value::Object(p)) => {
            for (k, v) in p {
                match b.get_mut(&k) {
                    Some(slot) => merge_json(slot, v),
                    None => {
                        if !v.is_null() {
                            b.insert(k, v);
                        }
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}

fn single(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

fn merge_if_valid(base: &mut Value, patch: Value) -> bool {
    let mut candidate = base.clone();
    merge_json(&mut candidate, patch);
    if serde_json::from_value::<Settings>(candidate.clone()).is_err() {
        return false;
    }
    *base = candidate;
    true
}

/// Merge a stored object over the defaults, leaf by leaf. Returns the merged
/// value (always a valid `Settings`) and the dotted paths of rejected fields.
pub fn merge_stored(stored: Map<String, Value>) -> (Value, Vec<String>) {
    let mut base = Settings::default().to_value();
    let mut whole = base.clone();
    merge_json(&mut whole, Value::Object(stored.clone()));
    if serde_json::from_value::<Settings>(whole.clone()).is_ok() {
        return (whole, Vec::new());
    }

    let mut rejected = Vec::new();
    for (key, value) in stored {
        match value {
            Value::Object(fields) if base.get(&key).is_some_and(Value::is_object) => {
                for (field, v) in fields {
                    if !merge_if_valid(&mut base, single(&key, single(&field, v))) {
                        rejected.push(format!("{key}.{field}"));
                    }
                }
            }
            v => {
                if !merge_if_valid(&mut base, single(&key, v)) {
                    rejected.push(key);
                }
            }
        }
    }
    (base, rejected)
}

/// Where settings and the activity log live on disk.
#[derive(Debug, Clone)]
pub struct Config {
    pub settings_file: PathBuf,
    pub log_file: PathBuf,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tzglance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".tzglance")
        }
    }

    pub fn settings_file_default() -> PathBuf {
        Self::config_dir().join("tzglance.json")
    }

    /// Default locations, or the given settings file (a leading `~/` is the
    /// home directory) with the log beside it.
    pub fn resolve(custom: Option<&str>) -> Self {
        let settings_file = match custom {
            Some(path) => match (path.strip_prefix("~/"), dirs::home_dir()) {
                (Some(rest), Some(home)) => home.join(rest),
                _ => PathBuf::from(path),
            },
            None => Self::settings_file_default(),
        };
        let log_file = settings_file
            .parent()
            .map(|dir| dir.join("tzglance.log"))
            .unwrap_or_else(|| PathBuf::from("tzglance.log"));

        Self {
            settings_file,
            log_file,
        }
    }
}
