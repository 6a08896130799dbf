//! ANSI colour palettes for the dashboard.

use ansi_term::Colour;
use crate::config::Theme;
use crate::models::advisory::AdvisoryKind;
use crate::models::work_status::WorkStatus;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub success: Colour,
    pub info: Colour,
    pub warning: Colour,
    pub muted: Colour,
    pub accent: Colour,
    pub lunch: Colour,
}

const LIGHT: Palette = Palette {
    success: Colour::Green,
    info: Colour::Blue,
    warning: Colour::Yellow,
    muted: Colour::Fixed(8),
    accent: Colour::Purple,
    lunch: Colour::Yellow,
};

const DARK: Palette = Palette {
    success: Colour::Fixed(10),
    info: Colour::Fixed(14),
    warning: Colour::Fixed(11),
    muted: Colour::White,
    accent: Colour::Fixed(13),
    lunch: Colour::Fixed(11),
};

/// Palette for a theme; `System` is resolved first.
pub fn palette(theme: Theme) -> Palette {
    match theme.resolve() {
        Theme::Dark => DARK,
        _ => LIGHT,
    }
}

pub fn color_for_status(status: WorkStatus, p: &Palette) -> Colour {
    match status {
        WorkStatus::Working => p.success,
        WorkStatus::Lunch => p.lunch,
        WorkStatus::BeforeWork | WorkStatus::AfterWork => p.muted,
    }
}

pub fn color_for_advisory(kind: AdvisoryKind, p: &Palette) -> Colour {
    match kind {
        AdvisoryKind::Success => p.success,
        AdvisoryKind::Info => p.info,
        AdvisoryKind::Warning => p.warning,
    }
}

pub fn paint(s: &str, colour: Colour) -> String {
    colour.paint(s).to_string()
}
