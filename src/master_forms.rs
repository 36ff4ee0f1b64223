//! Master-data form plumbing: which fields each reference entity needs and
//! the exact payload shape its create/update endpoints expect.

use chrono::NaiveDate;
use serde::Serialize;

/// The five master-data tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterKind {
    Boards,
    Mediums,
    Classes,
    Years,
    Books,
}

impl MasterKind {
    pub const ALL: [MasterKind; 5] = [
        MasterKind::Boards,
        MasterKind::Mediums,
        MasterKind::Classes,
        MasterKind::Years,
        MasterKind::Books,
    ];

    /// Path segment used by the create/update/delete endpoints. The read
    /// side fetches academic years from `academic-years`; mutations go
    /// through `years`.
    pub fn as_segment(&self) -> &'static str {
        match self {
            MasterKind::Boards => "boards",
            MasterKind::Mediums => "mediums",
            MasterKind::Classes => "classes",
            MasterKind::Years => "years",
            MasterKind::Books => "books",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MasterKind::Boards => "Boards",
            MasterKind::Mediums => "Mediums",
            MasterKind::Classes => "Classes",
            MasterKind::Years => "Academic Years",
            MasterKind::Books => "Books",
        }
    }

    /// The form fields this entity's add/edit dialog renders.
    pub fn field_schema(&self) -> &'static [FieldSpec] {
        match self {
            MasterKind::Boards => BOARD_FIELDS,
            MasterKind::Mediums => MEDIUM_FIELDS,
            MasterKind::Classes => CLASS_FIELDS,
            MasterKind::Years => YEAR_FIELDS,
            MasterKind::Books => BOOK_FIELDS,
        }
    }
}

/// Input widget a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
}

/// One form field of a master-data entity. All fields are required.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

const BOARD_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "board_name",
    label: "Board Name",
    kind: FieldKind::Text,
    placeholder: "e.g., CBSE",
}];

const MEDIUM_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "medium_name",
    label: "Medium Name",
    kind: FieldKind::Text,
    placeholder: "e.g., English",
}];

const CLASS_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "class_name",
        label: "Class Name",
        kind: FieldKind::Text,
        placeholder: "e.g., Class 1",
    },
    FieldSpec {
        name: "class_order",
        label: "Class Order",
        kind: FieldKind::Number,
        placeholder: "e.g., 1",
    },
];

const YEAR_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "year_name",
        label: "Year Name",
        kind: FieldKind::Text,
        placeholder: "e.g., 2024-2025",
    },
    FieldSpec {
        name: "start_date",
        label: "Start Date",
        kind: FieldKind::Date,
        placeholder: "",
    },
    FieldSpec {
        name: "end_date",
        label: "End Date",
        kind: FieldKind::Date,
        placeholder: "",
    },
];

const BOOK_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "book_name",
        label: "Book Name",
        kind: FieldKind::Text,
        placeholder: "e.g., Mathematics Textbook",
    },
    FieldSpec {
        name: "subject",
        label: "Subject",
        kind: FieldKind::Text,
        placeholder: "e.g., Mathematics",
    },
    FieldSpec {
        name: "publisher",
        label: "Publisher",
        kind: FieldKind::Text,
        placeholder: "e.g., NCERT",
    },
];

/// Create/update payload for one master-data record. Serializes untagged to
/// the exact field set the endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MasterPayload {
    Board {
        board_name: String,
    },
    Medium {
        medium_name: String,
    },
    Class {
        class_name: String,
        class_order: i32,
    },
    Year {
        year_name: String,
        start_date: String,
        end_date: String,
    },
    Book {
        book_name: String,
        subject: String,
        publisher: String,
    },
}

impl MasterPayload {
    /// Academic-year payload from typed dates, serialized `%Y-%m-%d` as the
    /// date inputs submit them.
    pub fn year(year_name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        MasterPayload::Year {
            year_name: year_name.into(),
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
        }
    }

    /// The tab this payload belongs to.
    pub fn kind(&self) -> MasterKind {
        match self {
            MasterPayload::Board { .. } => MasterKind::Boards,
            MasterPayload::Medium { .. } => MasterKind::Mediums,
            MasterPayload::Class { .. } => MasterKind::Classes,
            MasterPayload::Year { .. } => MasterKind::Years,
            MasterPayload::Book { .. } => MasterKind::Books,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_schemas_match_the_master_data_dialogs() {
        assert_eq!(MasterKind::Boards.field_schema().len(), 1);
        assert_eq!(MasterKind::Mediums.field_schema().len(), 1);

        let class_kinds: Vec<FieldKind> = MasterKind::Classes
            .field_schema()
            .iter()
            .map(|f| f.kind)
            .collect();
        assert_eq!(class_kinds, vec![FieldKind::Text, FieldKind::Number]);

        let year_kinds: Vec<FieldKind> = MasterKind::Years
            .field_schema()
            .iter()
            .map(|f| f.kind)
            .collect();
        assert_eq!(
            year_kinds,
            vec![FieldKind::Text, FieldKind::Date, FieldKind::Date]
        );

        assert!(
            MasterKind::Books
                .field_schema()
                .iter()
                .all(|f| f.kind == FieldKind::Text)
        );
    }

    #[test]
    fn payloads_serialize_to_the_exact_wire_fields() {
        let board = MasterPayload::Board {
            board_name: "CBSE".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&board).unwrap(),
            json!({"board_name": "CBSE"})
        );

        let year = MasterPayload::year(
            "2024-2025",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
        );
        assert_eq!(
            serde_json::to_value(&year).unwrap(),
            json!({
                "year_name": "2024-2025",
                "start_date": "2024-06-01",
                "end_date": "2025-04-30"
            })
        );
        assert_eq!(year.kind(), MasterKind::Years);
    }

    #[test]
    fn mutation_segments_use_the_tab_keys() {
        let segments: Vec<&str> = MasterKind::ALL.iter().map(|k| k.as_segment()).collect();
        assert_eq!(
            segments,
            vec!["boards", "mediums", "classes", "years", "books"]
        );
    }
}
