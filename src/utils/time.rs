//! Time utilities: parsing HH:MM, minute-of-day arithmetic, formatting durations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i32 = 24 * 60;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse "HH:MM" into a minute-of-day in `[0, 1440)`.
pub fn parse_minutes(t: &str) -> AppResult<i32> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(minute_of_day(&time))
}

/// Minute-of-day of any wall-clock value. Seconds are ignored.
pub fn minute_of_day<T: Timelike>(t: &T) -> i32 {
    (t.hour() * 60 + t.minute()) as i32
}

/// Render a minute-of-day as zero-padded "HH:MM".
/// Values outside the day (after translating between frames) wrap around.
pub fn minutes_to_hhmm(mins: i32) -> String {
    let m = mins.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Human duration: "0m", "45m", "2h", "1h 30m". The sign is dropped.
pub fn format_duration(total_minutes: i64) -> String {
    let abs_m = total_minutes.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    if hours == 0 {
        format!("{}m", minutes)
    } else if minutes == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}
