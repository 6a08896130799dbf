use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tzglance::config::check::check_stored;
use tzglance::config::{
    Config, MemoryStore, Settings, SettingsService, SettingsStore, Theme, UpdateFrequency,
};
use tzglance::errors::AppError;
use tzglance::models::location::Location;
use tzglance::models::schedule::SchedulePatch;

mod common;
use common::{defaults, schedule};

#[test]
fn test_missing_or_corrupt_data_falls_back_to_defaults() {
    assert_eq!(Settings::from_stored(None), defaults());
    assert_eq!(Settings::from_stored(Some("not json")), defaults());
    assert_eq!(Settings::from_stored(Some("[1, 2]")), defaults());
    assert_eq!(Settings::from_stored(Some(r#"{"theme": "neon"}"#)), defaults());
    assert_eq!(
        Settings::from_stored(Some(r#"{"irelandSchedule": {"startTime": "9am"}}"#)),
        defaults()
    );
}

#[test]
fn test_partial_data_is_merged_field_by_field() {
    let s = Settings::from_stored(Some(
        r#"{"use24Hour": false, "puneSchedule": {"startTime": "11:00"}, "extra": 1}"#,
    ));

    assert!(!s.use_24_hour);
    assert!(!s.show_seconds);
    assert_eq!(s.pune_schedule, schedule("11:00", "16:00", "17:00", "21:00"));
    assert_eq!(s.ireland_schedule, defaults().ireland_schedule);
}

#[test]
fn test_ill_typed_field_keeps_other_stored_fields() {
    let s = Settings::from_stored(Some(
        r#"{"use24Hour": false, "puneSchedule": {"startTime": "10:00", "endTime": 21}, "theme": "neon"}"#,
    ));

    assert!(!s.use_24_hour);
    assert_eq!(s.theme, Theme::Light);
    assert_eq!(s.pune_schedule, schedule("10:00", "16:00", "17:00", "21:00"));
    assert_eq!(s.ireland_schedule, defaults().ireland_schedule);
}

#[test]
fn test_stored_layout_uses_camel_case_keys() {
    let v = defaults().to_value();

    assert_eq!(v["irelandSchedule"]["startTime"], "09:00");
    assert_eq!(v["puneSchedule"]["endTime"], "21:00");
    assert_eq!(v["use24Hour"], true);
    assert_eq!(v["showSeconds"], false);
    assert_eq!(v["theme"], "light");
    assert_eq!(v["updateFrequency"], "standard");
}

#[test]
fn test_update_commits_and_persists() {
    let store = Arc::new(MemoryStore::default());
    let service = SettingsService::new(Arc::clone(&store));
    assert_eq!(service.current(), defaults());

    let patch = SchedulePatch {
        start_time: Some("08:00".parse().unwrap()),
        ..Default::default()
    };
    let committed = service.update_schedule(Location::Ireland, &patch).unwrap();

    assert_eq!(committed.ireland_schedule.start(), 8 * 60);
    assert_eq!(service.current(), committed);

    let raw = store.load().unwrap().expect("saved");
    assert!(raw.contains(r#""startTime": "08:00""#));

    // A new service over the same store sees the committed value.
    let reloaded = SettingsService::new(Arc::clone(&store));
    assert_eq!(reloaded.current(), committed);
}

#[test]
fn test_apply_patch_merges_and_validates() {
    let service = SettingsService::new(MemoryStore::default());

    let s = service
        .apply_patch(json!({"theme": "dark", "puneSchedule": {"lunchEnd": "16:45"}}))
        .unwrap();
    assert_eq!(s.theme, Theme::Dark);
    assert_eq!(s.pune_schedule.lunch_end(), 16 * 60 + 45);
    assert_eq!(s.pune_schedule.start(), 12 * 60);

    let bad = service.apply_patch(json!({"irelandSchedule": {"endTime": "25:00"}}));
    assert!(matches!(bad, Err(AppError::Config(_))));
    assert_eq!(service.current(), s);

    assert!(service.apply_patch(json!(5)).is_err());
}

#[test]
fn test_reset_restores_defaults() {
    let store = Arc::new(MemoryStore::new(Some(r#"{"updateFrequency": "smooth"}"#)));
    let service = SettingsService::new(Arc::clone(&store));
    assert_eq!(service.current().update_frequency, UpdateFrequency::Smooth);

    service.reset().unwrap();
    assert_eq!(service.current(), defaults());
    assert_eq!(Settings::from_stored(store.contents().as_deref()), defaults());
}

#[test]
fn test_update_frequency_intervals() {
    assert_eq!(UpdateFrequency::Standard.interval().as_secs(), 60);
    assert_eq!(UpdateFrequency::Smooth.interval().as_secs(), 1);
}

#[test]
fn test_theme_from_terminal_hint() {
    assert_eq!(Theme::from_colorfgbg("15;0"), Theme::Dark);
    assert_eq!(Theme::from_colorfgbg("0;15"), Theme::Light);
    assert_eq!(Theme::from_colorfgbg("12;default;8"), Theme::Dark);
    assert_eq!(Theme::from_colorfgbg("nonsense"), Theme::Light);
    assert_eq!(Theme::Dark.resolve(), Theme::Dark);
}

#[test]
fn test_check_reports_missing_fields() {
    let report = check_stored(Some(r#"{"irelandSchedule": {"startTime": "08:00"}}"#));

    assert!(!report.unreadable);
    assert!(report.missing_fields.contains(&"showSeconds".to_string()));
    assert!(report.missing_fields.contains(&"puneSchedule".to_string()));
    assert!(
        report
            .missing_fields
            .contains(&"irelandSchedule.endTime".to_string())
    );
    assert!(!report.is_clean());
}

#[test]
fn test_check_reports_unordered_and_unreadable() {
    let unordered = check_stored(Some(
        r#"{"irelandSchedule": {"startTime": "18:00", "lunchStart": "13:00", "lunchEnd": "14:00", "endTime": "17:30"}}"#,
    ));
    assert_eq!(unordered.unordered_schedules, vec![Location::Ireland]);

    assert!(check_stored(Some("{")).unreadable);

    let ill_typed = check_stored(Some(r#"{"theme": 3, "puneSchedule": {"endTime": "9pm"}}"#));
    assert!(!ill_typed.unreadable);
    assert_eq!(ill_typed.invalid_fields, vec!["puneSchedule.endTime", "theme"]);
    assert!(!ill_typed.is_clean());

    assert!(check_stored(None).is_clean());

    let full = serde_json::to_string(&defaults()).unwrap();
    assert!(check_stored(Some(&full)).is_clean());
}

#[test]
fn test_config_resolves_home_and_log_beside_settings() {
    let custom = Config::resolve(Some("/tmp/tzg/settings.json"));
    assert_eq!(custom.settings_file, PathBuf::from("/tmp/tzg/settings.json"));
    assert_eq!(custom.log_file, PathBuf::from("/tmp/tzg/tzglance.log"));

    if let Some(home) = dirs::home_dir() {
        let tilde = Config::resolve(Some("~/tzg/settings.json"));
        assert_eq!(tilde.settings_file, home.join("tzg/settings.json"));
    }

    let default = Config::resolve(None);
    assert_eq!(default.settings_file, Config::settings_file_default());
}
