use serde::{Deserialize, Serialize};

/// A catalog book. Sourced externally, immutable within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub book_name: String,
    pub subject: String,
    pub publisher: String,
}

impl Book {
    /// Display label used by selectors and listings.
    pub fn label(&self) -> String {
        format!("{} - {} ({})", self.book_name, self.subject, self.publisher)
    }
}
