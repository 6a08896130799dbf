#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use tzglance::config::Settings;
use tzglance::models::schedule::WorkSchedule;

pub fn tzg() -> Command {
    cargo_bin_cmd!("tzglance")
}

/// Fresh per-test directory in the system temp dir; returns the settings path.
pub fn setup_settings(name: &str) -> String {
    let mut dir: PathBuf = env::temp_dir();
    dir.push("tzglance_tests");
    dir.push(name);
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create test dir");
    dir.join("tzglance.json").to_string_lossy().to_string()
}

pub fn write_settings(path: &str, raw: &str) {
    fs::write(path, raw).expect("write settings");
}

pub fn instant(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid instant")
        .with_timezone(&Utc)
}

pub fn schedule(start: &str, lunch_start: &str, lunch_end: &str, end: &str) -> WorkSchedule {
    WorkSchedule::new(start, lunch_start, lunch_end, end).expect("valid schedule")
}

pub fn hm(s: &str) -> i32 {
    tzglance::utils::time::parse_minutes(s).expect("valid HH:MM")
}

pub fn defaults() -> Settings {
    Settings::default()
}
