//! Progress through the workday and the status lines under each bar.

use crate::models::progress::ProgressInfo;
use crate::models::schedule::WorkSchedule;
use crate::utils::time::{MINUTES_PER_DAY, format_duration};

fn percent_of(part: i32, total: i32) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

pub fn calculate_progress(minute: i32, schedule: &WorkSchedule) -> ProgressInfo {
    let start = schedule.start();
    let lunch_start = schedule.lunch_start();
    let lunch_end = schedule.lunch_end();
    let end = schedule.end();
    let total = schedule.span_minutes();

    let mut info = ProgressInfo {
        percentage: 0.0,
        status_text: String::new(),
        secondary_text: String::new(),
        is_before_work: false,
        is_after_work: false,
        lunch_start_percent: percent_of(lunch_start - start, total),
        lunch_end_percent: percent_of(lunch_end - start, total),
    };

    if minute < start {
        info.is_before_work = true;
        info.status_text = format!("Starts in {}", format_duration((start - minute) as i64));
    } else if minute >= end {
        info.is_after_work = true;
        info.percentage = 100.0;
        info.status_text = format!("Finished {} ago", format_duration((minute - end) as i64));
        let next_start = MINUTES_PER_DAY - minute + start;
        info.secondary_text = format!("Next start in {}", format_duration(next_start as i64));
    } else if minute >= lunch_start && minute < lunch_end {
        info.percentage = percent_of(minute - start, total);
        info.status_text = format!(
            "Lunch, ends in {}",
            format_duration((lunch_end - minute) as i64)
        );
    } else {
        info.percentage = percent_of(minute - start, total);
        let lunch_taken = if minute > lunch_end {
            schedule.lunch_minutes()
        } else {
            0
        };
        let worked = minute - start - lunch_taken;
        info.status_text = format!("{} into work", format_duration(worked as i64));
        info.secondary_text = format!("Finishes in {}", format_duration((end - minute) as i64));
    }

    info.percentage = info.percentage.clamp(0.0, 100.0);
    info
}
