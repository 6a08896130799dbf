use serde::Serialize;

/// Difference between Pune-local and Ireland-local wall clocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffsetInfo {
    /// Signed: positive when Pune is ahead.
    pub total_minutes: i32,
    pub hours: i32,
    pub minutes: i32,
    pub text: String,
}
