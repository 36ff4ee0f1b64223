use serde::{Deserialize, Serialize};

use super::{AcademicYear, Board, Book, Medium, SchoolClass};

/// A persisted book set as returned by the inventory API. List and
/// fetch-by-id responses embed the related master records and items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSet {
    pub id: i32,
    pub set_name: String,
    pub board_id: i32,
    pub medium_id: i32,
    pub class_id: i32,
    pub year_id: i32,
    #[serde(default)]
    pub book_set_items: Vec<BookSetItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boards: Option<Board>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mediums: Option<Medium>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<SchoolClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_years: Option<AcademicYear>,
}

/// One line of a persisted set: the catalog book plus its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSetItem {
    pub books: Book,
    pub quantity: u32,
}

/// Wire payload for create/update. Field names and nesting are the API's
/// contract; the server only needs ids and quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSetSubmission {
    pub board_id: i32,
    pub medium_id: i32,
    pub class_id: i32,
    pub year_id: i32,
    pub set_name: String,
    pub books: Vec<SubmissionBook>,
}

/// One book line of a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionBook {
    pub book_id: i32,
    pub quantity: u32,
}
