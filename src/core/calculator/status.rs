//! Work-status classifier.

use crate::models::schedule::WorkSchedule;
use crate::models::work_status::WorkStatus;

/// Classify a minute-of-day against a schedule.
///
/// Every segment is closed on its lower bound, so a boundary minute always
/// belongs to the segment that starts there.
pub fn classify(minute: i32, schedule: &WorkSchedule) -> WorkStatus {
    if minute < schedule.start() {
        WorkStatus::BeforeWork
    } else if minute < schedule.lunch_start() {
        WorkStatus::Working
    } else if minute < schedule.lunch_end() {
        WorkStatus::Lunch
    } else if minute < schedule.end() {
        WorkStatus::Working
    } else {
        WorkStatus::AfterWork
    }
}
