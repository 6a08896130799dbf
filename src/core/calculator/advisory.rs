//! "Is now a good time to message Pune?" decision table.

use crate::models::advisory::{Advisory, AdvisoryKind};
use crate::models::overlap::OverlapInfo;
use crate::models::work_status::WorkStatus;
use crate::utils::time::format_duration;

pub const LIMITED_OVERLAP_MINUTES: i32 = 30;

pub fn advise(
    ireland: WorkStatus,
    pune: WorkStatus,
    overlap: &OverlapInfo,
    ireland_now: i32,
) -> Advisory {
    match pune {
        WorkStatus::AfterWork => Advisory::new(AdvisoryKind::Warning, "Pune finished for today"),
        WorkStatus::Lunch => Advisory::new(AdvisoryKind::Info, "Pune at lunch"),
        WorkStatus::BeforeWork => Advisory::new(AdvisoryKind::Info, "Pune not yet started"),
        WorkStatus::Working => {
            if ireland.is_working()
                && let Some(next) = overlap.periods.iter().find(|p| p.end_minute > ireland_now)
            {
                let left = next.end_minute - ireland_now;
                if left <= LIMITED_OVERLAP_MINUTES {
                    return Advisory::new(
                        AdvisoryKind::Warning,
                        format!("Limited overlap left, {}", format_duration(left as i64)),
                    );
                }
            }
            Advisory::new(AdvisoryKind::Success, "Good time to message")
        }
    }
}
