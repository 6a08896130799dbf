use serde::Serialize;

/// How far a location is through its workday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressInfo {
    /// Percent of the work span elapsed, clamped to `[0, 100]`.
    pub percentage: f64,
    pub status_text: String,
    pub secondary_text: String,
    pub is_before_work: bool,
    pub is_after_work: bool,
    /// Lunch segment as percentages of the span, for rendering only.
    pub lunch_start_percent: f64,
    pub lunch_end_percent: f64,
}
