//! Signed offset between the two local clocks.

use crate::models::location::Location;
use crate::models::offset::OffsetInfo;
use chrono::{DateTime, Offset, TimeZone, Utc};

fn plural(n: i32, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// UTC offset of a location at the given instant, in minutes (DST-aware).
pub fn utc_offset_minutes(location: Location, instant: DateTime<Utc>) -> i32 {
    let local = location.tz().from_utc_datetime(&instant.naive_utc());
    local.offset().fix().local_minus_utc() / 60
}

/// Pune-local minus Ireland-local at `instant`.
pub fn calculate_offset(instant: DateTime<Utc>) -> OffsetInfo {
    let total = utc_offset_minutes(Location::Pune, instant)
        - utc_offset_minutes(Location::Ireland, instant);
    offset_from_minutes(total)
}

pub fn offset_from_minutes(total_minutes: i32) -> OffsetInfo {
    let hours = total_minutes.abs() / 60;
    let minutes = total_minutes.abs() % 60;

    let amount = if minutes == 0 {
        plural(hours, "hour")
    } else {
        format!("{} {}", plural(hours, "hour"), plural(minutes, "minute"))
    };

    let text = match total_minutes {
        0 => "Pune and UKI are on the same time".to_string(),
        t if t > 0 => format!("Pune is {amount} ahead of UKI"),
        _ => format!("Pune is {amount} behind UKI"),
    };

    OffsetInfo {
        total_minutes,
        hours,
        minutes,
        text,
    }
}
