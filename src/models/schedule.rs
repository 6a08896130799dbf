use crate::errors::{AppError, AppResult};
use crate::utils::time::{minutes_to_hhmm, parse_minutes};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wall-clock minute-of-day, stored on disk as "HH:MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(i32);

impl ClockTime {
    /// Literal constructor for known-good values.
    pub const fn at(hour: i32, minute: i32) -> Self {
        Self(hour * 60 + minute)
    }

    pub fn minutes(self) -> i32 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        parse_minutes(s).map(ClockTime)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&minutes_to_hhmm(self.0))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A contiguous local-time interval during which a location is working.
/// Boundaries are minutes in some local frame and may leave `[0, 1440)`
/// once translated into another location's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkBlock {
    pub start: i32,
    pub end: i32,
}

impl WorkBlock {
    pub fn shifted(self, by: i32) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }
}

/// Daily work schedule of one location.
///
/// The order `start <= lunch_start <= lunch_end <= end` is not enforced:
/// malformed schedules simply yield negative durations downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSchedule {
    pub start_time: ClockTime,
    pub lunch_start: ClockTime,
    pub lunch_end: ClockTime,
    pub end_time: ClockTime,
}

impl WorkSchedule {
    pub fn new(start: &str, lunch_start: &str, lunch_end: &str, end: &str) -> AppResult<Self> {
        Ok(Self {
            start_time: start.parse()?,
            lunch_start: lunch_start.parse()?,
            lunch_end: lunch_end.parse()?,
            end_time: end.parse()?,
        })
    }

    pub fn start(&self) -> i32 {
        self.start_time.minutes()
    }

    pub fn lunch_start(&self) -> i32 {
        self.lunch_start.minutes()
    }

    pub fn lunch_end(&self) -> i32 {
        self.lunch_end.minutes()
    }

    pub fn end(&self) -> i32 {
        self.end_time.minutes()
    }

    pub fn span_minutes(&self) -> i32 {
        self.end() - self.start()
    }

    pub fn lunch_minutes(&self) -> i32 {
        self.lunch_end() - self.lunch_start()
    }

    /// Pre-lunch and post-lunch blocks, in this order.
    pub fn blocks(&self) -> [WorkBlock; 2] {
        [
            WorkBlock {
                start: self.start(),
                end: self.lunch_start(),
            },
            WorkBlock {
                start: self.lunch_end(),
                end: self.end(),
            },
        ]
    }

    pub fn is_ordered(&self) -> bool {
        self.start() <= self.lunch_start()
            && self.lunch_start() <= self.lunch_end()
            && self.lunch_end() <= self.end()
    }

    pub fn apply(&mut self, patch: &SchedulePatch) {
        if let Some(t) = patch.start_time {
            self.start_time = t;
        }
        if let Some(t) = patch.lunch_start {
            self.lunch_start = t;
        }
        if let Some(t) = patch.lunch_end {
            self.lunch_end = t;
        }
        if let Some(t) = patch.end_time {
            self.end_time = t;
        }
    }
}

/// Partial schedule update; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulePatch {
    pub start_time: Option<ClockTime>,
    pub lunch_start: Option<ClockTime>,
    pub lunch_end: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
}

impl SchedulePatch {
    pub fn is_empty(&self) -> bool {
        self.start_time.is_none()
            && self.lunch_start.is_none()
            && self.lunch_end.is_none()
            && self.end_time.is_none()
    }
}
