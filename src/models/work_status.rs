use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkStatus {
    BeforeWork,
    Working,
    Lunch,
    AfterWork,
}

impl WorkStatus {
    /// Label shown on the time cards.
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::BeforeWork => "Before Work",
            WorkStatus::Working => "Working",
            WorkStatus::Lunch => "Lunch",
            WorkStatus::AfterWork => "After Work",
        }
    }

    pub fn is_working(&self) -> bool {
        matches!(self, WorkStatus::Working)
    }
}
