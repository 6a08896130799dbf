//! Formatting utilities used for dashboard output.

use ansi_term::Style;
use chrono::{Days, NaiveDate, NaiveDateTime};
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Pad to a display width, counting wide glyphs correctly.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn center(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let total = width.saturating_sub(w);
    let left = total / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(total - left))
}

/// Clock face: "14:05", "14:05:09", "02:05 PM", "02:05:09 PM".
pub fn format_clock(t: &NaiveDateTime, use_24_hour: bool, show_seconds: bool) -> String {
    let fmt = match (use_24_hour, show_seconds) {
        (true, true) => "%H:%M:%S",
        (true, false) => "%H:%M",
        (false, true) => "%I:%M:%S %p",
        (false, false) => "%I:%M %p",
    };
    t.format(fmt).to_string()
}

/// "Sunday, 18 Oct"
pub fn format_long_date(t: &NaiveDateTime) -> String {
    t.format("%A, %d %b").to_string()
}

/// Where `local` falls relative to `reference`: Today, Tomorrow or Yesterday.
pub fn day_indicator(local: NaiveDate, reference: NaiveDate) -> &'static str {
    if local == reference {
        "Today"
    } else if reference.checked_add_days(Days::new(1)) == Some(local) {
        "Tomorrow"
    } else if reference.checked_sub_days(Days::new(1)) == Some(local) {
        "Yesterday"
    } else {
        "Today"
    }
}
