use regex::Regex;
use tzglance::config::Theme;
use tzglance::core::logic::Core;
use tzglance::models::advisory::AdvisoryKind;
use tzglance::models::work_status::WorkStatus;
use tzglance::ui::render::render_dashboard;

mod common;
use common::{defaults, instant};

#[test]
fn test_snapshot_mid_morning_in_summer() {
    // 11:00 in Dublin (IST), 15:30 in Pune.
    let snap = Core::build_snapshot(instant("2025-10-18T10:00:00Z"), &defaults());

    assert_eq!(snap.ireland.formatted_time, "11:00");
    assert_eq!(snap.pune.formatted_time, "15:30");
    assert_eq!(snap.ireland.formatted_date, "Saturday, 18 Oct");
    assert_eq!(snap.pune.day_indicator, "Today");
    assert_eq!(snap.ireland.status, WorkStatus::Working);
    assert_eq!(snap.pune.status, WorkStatus::Working);

    assert_eq!(snap.offset.total_minutes, 270);
    assert_eq!(snap.overlap.message, "Overlap today");
    assert_eq!(snap.overlap.periods.len(), 3);

    assert_eq!(snap.ireland_progress.status_text, "2h into work");
    assert_eq!(snap.pune_progress.status_text, "3h 30m into work");
    assert_eq!(snap.pune_progress.secondary_text, "Finishes in 5h 30m");

    assert_eq!(snap.advisory.kind, AdvisoryKind::Warning);
    assert_eq!(snap.advisory.text, "Limited overlap left, 30m");
}

#[test]
fn test_snapshot_evening_pune_finished() {
    let snap = Core::build_snapshot(instant("2025-10-18T17:00:00Z"), &defaults());

    assert_eq!(snap.ireland.formatted_time, "18:00");
    assert_eq!(snap.pune.formatted_time, "22:30");
    assert_eq!(snap.ireland.status, WorkStatus::AfterWork);
    assert_eq!(snap.overlap.message, "No overlap remaining today");
    assert_eq!(snap.advisory.text, "Pune finished for today");
    assert_eq!(snap.ireland_progress.secondary_text, "Next start in 15h");
}

#[test]
fn test_snapshot_pune_already_tomorrow() {
    let snap = Core::build_snapshot(instant("2025-10-18T20:00:00Z"), &defaults());

    assert_eq!(snap.pune.formatted_time, "01:30");
    assert_eq!(snap.pune.day_indicator, "Tomorrow");
    assert_eq!(snap.pune.formatted_date, "Sunday, 19 Oct");
    assert_eq!(snap.pune.status, WorkStatus::BeforeWork);
    assert_eq!(snap.pune_progress.status_text, "Starts in 10h 30m");
    assert_eq!(snap.advisory.text, "Pune not yet started");
}

#[test]
fn test_snapshot_winter_offset() {
    // Dublin on GMT: 10:00 there, 15:30 in Pune.
    let snap = Core::build_snapshot(instant("2025-01-15T10:00:00Z"), &defaults());

    assert_eq!(snap.ireland.formatted_time, "10:00");
    assert_eq!(snap.offset.text, "Pune is 5 hours 30 minutes ahead of UKI");
    assert_eq!(snap.overlap.periods[0].ireland_start, "09:00");
    assert_eq!(snap.overlap.periods[0].ireland_end, "10:30");
}

#[test]
fn test_snapshot_clock_format_settings() {
    let mut settings = defaults();
    settings.use_24_hour = false;
    settings.show_seconds = true;

    let snap = Core::build_snapshot(instant("2025-10-18T13:05:09Z"), &settings);
    assert_eq!(snap.ireland.formatted_time, "02:05:09 PM");
    assert_eq!(snap.pune.formatted_time, "06:35:09 PM");
}

#[test]
fn test_dashboard_theme_changes_colours_only() {
    let snap = Core::build_snapshot(instant("2025-10-18T10:00:00Z"), &defaults());
    let light = render_dashboard(&snap, Theme::Light);
    let dark = render_dashboard(&snap, Theme::Dark);
    assert_ne!(light, dark);

    let ansi = Regex::new(r"\x1B\[[0-9;]*m").unwrap();
    let plain = ansi.replace_all(&light, "");
    assert_eq!(plain, ansi.replace_all(&dark, ""));
    assert!(plain.contains("Timezone Glance"));
    assert!(plain.contains("Pune, India"));
}
