//! Intersection of the two locations' work blocks.

use crate::models::overlap::{OverlapInfo, OverlapPeriod};
use crate::models::schedule::WorkSchedule;
use crate::utils::time::minutes_to_hhmm;

pub const MSG_OVERLAP_TODAY: &str = "Overlap today";
pub const MSG_NO_OVERLAP_REMAINING: &str = "No overlap remaining today";
pub const MSG_NO_OVERLAP: &str = "No overlap today";

/// Every overlap between the two schedules, in the Ireland frame.
///
/// `offset_minutes` is Pune-local minus Ireland-local. Pairs are visited
/// pre/pre, pre/post, post/pre, post/post and emitted in that order; empty
/// intersections are dropped.
pub fn overlap_periods(
    ireland: &WorkSchedule,
    pune: &WorkSchedule,
    offset_minutes: i32,
) -> Vec<OverlapPeriod> {
    let pune_in_ireland = pune.blocks().map(|b| b.shifted(-offset_minutes));

    let mut periods = Vec::new();
    for ir in ireland.blocks() {
        for pu in pune_in_ireland {
            let start = ir.start.max(pu.start);
            let end = ir.end.min(pu.end);

            if start < end {
                periods.push(OverlapPeriod {
                    ireland_start: minutes_to_hhmm(start),
                    ireland_end: minutes_to_hhmm(end),
                    pune_start: minutes_to_hhmm(start + offset_minutes),
                    pune_end: minutes_to_hhmm(end + offset_minutes),
                    start_minute: start,
                    end_minute: end,
                });
            }
        }
    }
    periods
}

/// Periods whose Ireland-frame end is still ahead of `ireland_now`.
pub fn remaining_periods(periods: &[OverlapPeriod], ireland_now: i32) -> Vec<OverlapPeriod> {
    periods
        .iter()
        .filter(|p| p.end_minute > ireland_now)
        .cloned()
        .collect()
}

pub fn compute_overlap(
    ireland: &WorkSchedule,
    pune: &WorkSchedule,
    offset_minutes: i32,
    ireland_now: i32,
) -> OverlapInfo {
    let periods = overlap_periods(ireland, pune, offset_minutes);
    let remaining = remaining_periods(&periods, ireland_now);

    if !remaining.is_empty() {
        return OverlapInfo {
            has_overlap: true,
            periods: remaining,
            message: MSG_OVERLAP_TODAY.to_string(),
            next_overlap_message: None,
        };
    }

    // Schedules recur daily, so today's first window is shown as tomorrow's.
    let next_overlap_message = periods.first().map(|first| {
        format!(
            "Next overlap: tomorrow {} to {} UKI time",
            first.ireland_start, first.ireland_end
        )
    });

    let message = if periods.is_empty() {
        MSG_NO_OVERLAP
    } else {
        MSG_NO_OVERLAP_REMAINING
    };

    OverlapInfo {
        has_overlap: false,
        periods,
        message: message.to_string(),
        next_overlap_message,
    }
}
