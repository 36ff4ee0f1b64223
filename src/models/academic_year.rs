use serde::{Deserialize, Serialize};

/// An academic year with its date range. Dates arrive as ISO timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicYear {
    pub id: i32,
    pub year_name: String,
    pub start_date: String,
    pub end_date: String,
}

impl AcademicYear {
    /// Date portion of the start timestamp, for display.
    pub fn start_date_only(&self) -> &str {
        self.start_date.split('T').next().unwrap_or_default()
    }

    /// Date portion of the end timestamp, for display.
    pub fn end_date_only(&self) -> &str {
        self.end_date.split('T').next().unwrap_or_default()
    }
}
