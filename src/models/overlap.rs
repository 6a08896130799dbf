use serde::Serialize;

/// A window in which both locations are inside a work block,
/// expressed in each location's own local time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapPeriod {
    pub ireland_start: String,
    pub ireland_end: String,
    pub pune_start: String,
    pub pune_end: String,
    /// Raw boundaries in the Ireland frame (may fall outside the day).
    #[serde(skip)]
    pub start_minute: i32,
    #[serde(skip)]
    pub end_minute: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapInfo {
    /// True when at least one period has not ended yet today.
    pub has_overlap: bool,
    /// Remaining periods, or every period when none remain.
    pub periods: Vec<OverlapPeriod>,
    pub message: String,
    pub next_overlap_message: Option<String>,
}
