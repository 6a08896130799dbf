use crate::models::advisory::Advisory;
use crate::models::location::Location;
use crate::models::offset::OffsetInfo;
use crate::models::overlap::OverlapInfo;
use crate::models::progress::ProgressInfo;
use crate::models::work_status::WorkStatus;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalTimeInfo {
    pub location: Location,
    pub local: NaiveDateTime,
    pub formatted_time: String,
    pub formatted_date: String,
    pub day_indicator: String,
    pub status: WorkStatus,
}

/// Everything the dashboard shows for one instant. Never mutated after build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub instant: DateTime<Utc>,
    pub ireland: LocalTimeInfo,
    pub pune: LocalTimeInfo,
    pub offset: OffsetInfo,
    pub ireland_progress: ProgressInfo,
    pub pune_progress: ProgressInfo,
    pub overlap: OverlapInfo,
    pub advisory: Advisory,
}

impl Snapshot {
    pub fn progress(&self, location: Location) -> &ProgressInfo {
        match location {
            Location::Ireland => &self.ireland_progress,
            Location::Pune => &self.pune_progress,
        }
    }
}
