use crate::config::Settings;
use crate::core::calculator::{advisory, offset, overlap, progress, status};
use crate::models::location::Location;
use crate::models::snapshot::{LocalTimeInfo, Snapshot};
use crate::utils::formatting::{day_indicator, format_clock, format_long_date};
use crate::utils::time::minute_of_day;
use chrono::{DateTime, NaiveDateTime, Utc};

pub struct Core;

impl Core {
    /// Wall-clock time of `location` at `instant`, through the IANA rules.
    pub fn local_time(location: Location, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&location.tz()).naive_local()
    }

    /// Recompute every derived value for one instant.
    pub fn build_snapshot(instant: DateTime<Utc>, settings: &Settings) -> Snapshot {
        let ireland_local = Self::local_time(Location::Ireland, instant);
        let pune_local = Self::local_time(Location::Pune, instant);

        let ireland_now = minute_of_day(&ireland_local);
        let pune_now = minute_of_day(&pune_local);

        let ireland_status = status::classify(ireland_now, &settings.ireland_schedule);
        let pune_status = status::classify(pune_now, &settings.pune_schedule);

        let offset = offset::calculate_offset(instant);
        let overlap = overlap::compute_overlap(
            &settings.ireland_schedule,
            &settings.pune_schedule,
            offset.total_minutes,
            ireland_now,
        );
        let advisory = advisory::advise(ireland_status, pune_status, &overlap, ireland_now);

        let time_info = |location, local: NaiveDateTime, status| LocalTimeInfo {
            location,
            local,
            formatted_time: format_clock(&local, settings.use_24_hour, settings.show_seconds),
            formatted_date: format_long_date(&local),
            day_indicator: day_indicator(local.date(), ireland_local.date()).to_string(),
            status,
        };

        Snapshot {
            instant,
            ireland: time_info(Location::Ireland, ireland_local, ireland_status),
            pune: time_info(Location::Pune, pune_local, pune_status),
            offset,
            ireland_progress: progress::calculate_progress(ireland_now, &settings.ireland_schedule),
            pune_progress: progress::calculate_progress(pune_now, &settings.pune_schedule),
            overlap,
            advisory,
        }
    }
}
