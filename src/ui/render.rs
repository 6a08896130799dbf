//! Text rendering of a dashboard snapshot.

use crate::config::Theme;
use crate::models::location::Location;
use crate::models::overlap::OverlapInfo;
use crate::models::progress::ProgressInfo;
use crate::models::snapshot::{LocalTimeInfo, Snapshot};
use crate::utils::colors::{Palette, color_for_advisory, color_for_status, paint, palette};
use crate::utils::formatting::{bold, center, pad_right};
use crate::utils::table::{Column, Table};

const CARD_WIDTH: usize = 34;
const BAR_WIDTH: usize = 40;

fn card_lines(info: &LocalTimeInfo, p: &Palette) -> [String; 4] {
    let title = info.location.label().to_uppercase();
    let day = format!("{} · {}", info.day_indicator, info.formatted_date);
    let status = info.status.label().to_uppercase();

    [
        paint(&center(&title, CARD_WIDTH), p.muted),
        bold(&center(&info.formatted_time, CARD_WIDTH)),
        center(&day, CARD_WIDTH),
        paint(&center(&status, CARD_WIDTH), color_for_status(info.status, p)),
    ]
}

/// Both time cards side by side.
pub fn render_cards(snapshot: &Snapshot, p: &Palette) -> String {
    let left = card_lines(&snapshot.ireland, p);
    let right = card_lines(&snapshot.pune, p);

    left.iter()
        .zip(right.iter())
        .map(|(l, r)| format!("{l}  {r}\n"))
        .collect()
}

/// Bar with the elapsed part filled and the lunch segment shaded.
pub fn progress_bar(progress: &ProgressInfo, p: &Palette) -> String {
    let mut bar = String::new();
    for i in 0..BAR_WIDTH {
        let pos = (i as f64 + 0.5) / BAR_WIDTH as f64 * 100.0;
        let in_lunch = pos >= progress.lunch_start_percent && pos < progress.lunch_end_percent;

        let cell = if pos <= progress.percentage {
            paint("█", if in_lunch { p.lunch } else { p.accent })
        } else if in_lunch {
            paint("░", p.lunch)
        } else {
            paint("·", p.muted)
        };
        bar.push_str(&cell);
    }
    bar
}

pub fn render_progress(location: Location, progress: &ProgressInfo, p: &Palette) -> String {
    let mut out = format!(
        "{} {} {:>3.0}%\n",
        pad_right(location.label(), 12),
        progress_bar(progress, p),
        progress.percentage
    );

    let mut text = progress.status_text.clone();
    if !progress.secondary_text.is_empty() {
        text.push_str(" · ");
        text.push_str(&progress.secondary_text);
    }
    out.push_str(&format!("{} {}\n", " ".repeat(12), text));
    out
}

pub fn render_overlap(overlap: &OverlapInfo) -> String {
    let mut out = format!("{}\n", bold(&overlap.message.to_uppercase()));

    if overlap.periods.is_empty() {
        out.push_str("No overlap windows available\n");
    } else {
        let mut table = Table::new(vec![
            Column::new(Location::Ireland.label(), 16),
            Column::new(Location::Pune.label(), 16),
        ]);
        for period in &overlap.periods {
            table.add_row(vec![
                format!("{} – {}", period.ireland_start, period.ireland_end),
                format!("{} – {}", period.pune_start, period.pune_end),
            ]);
        }
        out.push_str(&table.render());
    }

    if let Some(next) = &overlap.next_overlap_message {
        out.push_str(next);
        out.push('\n');
    }
    out
}

/// Full dashboard for one snapshot.
pub fn render_dashboard(snapshot: &Snapshot, theme: Theme) -> String {
    let p = palette(theme);
    let mut out = String::new();

    out.push_str(&bold("Timezone Glance"));
    out.push('\n');
    out.push_str(&paint(&snapshot.offset.text, p.muted));
    out.push_str("\n\n");

    out.push_str(&render_cards(snapshot, &p));
    out.push('\n');

    let advisory = &snapshot.advisory;
    out.push_str(&paint(
        &format!("● {}", advisory.text),
        color_for_advisory(advisory.kind, &p),
    ));
    out.push_str("\n\n");

    for location in Location::ALL {
        out.push_str(&render_progress(location, snapshot.progress(location), &p));
    }
    out.push('\n');

    out.push_str(&render_overlap(&snapshot.overlap));
    out
}
