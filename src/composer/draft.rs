//! The working state of a create/edit session and its validation.

use crate::domain::ComposerError;
use crate::models::{BookSet, BookSetSubmission, SubmissionBook};

use super::registry::{SelectionEntry, SelectionRegistry};

/// In-progress, unsaved state of a book set. `None` foreign keys model the
/// empty selector option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookSetDraft {
    pub board_id: Option<i32>,
    pub medium_id: Option<i32>,
    pub class_id: Option<i32>,
    pub year_id: Option<i32>,
    pub set_name: String,
    pub selection: SelectionRegistry,
}

impl BookSetDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a draft from a persisted book set (edit-mode bootstrap).
    /// Missing or empty `book_set_items` hydrate to an empty selection.
    pub fn from_persisted(book_set: &BookSet) -> Self {
        let entries = book_set
            .book_set_items
            .iter()
            .map(|item| SelectionEntry {
                book_id: item.books.id,
                quantity: item.quantity,
                book: item.books.clone(),
            })
            .collect();

        Self {
            board_id: Some(book_set.board_id),
            medium_id: Some(book_set.medium_id),
            class_id: Some(book_set.class_id),
            year_id: Some(book_set.year_id),
            set_name: book_set.set_name.clone(),
            selection: SelectionRegistry::from_entries(entries),
        }
    }

    /// Check the draft is submittable: every scalar field set, then at least
    /// one book selected. Stops at the first failure.
    pub fn validate(&self) -> Result<(), ComposerError> {
        if self.board_id.is_none()
            || self.medium_id.is_none()
            || self.class_id.is_none()
            || self.year_id.is_none()
            || self.set_name.trim().is_empty()
        {
            return Err(ComposerError::MissingField);
        }
        if self.selection.is_empty() {
            return Err(ComposerError::EmptySelection);
        }
        Ok(())
    }

    /// Assemble the wire payload: ids and quantities in selection order,
    /// catalog metadata stripped. Callers run `validate` first; the only
    /// error arm here is an unset foreign key, which has no integer form.
    pub fn to_submission(&self) -> Result<BookSetSubmission, ComposerError> {
        Ok(BookSetSubmission {
            board_id: self.board_id.ok_or(ComposerError::MissingField)?,
            medium_id: self.medium_id.ok_or(ComposerError::MissingField)?,
            class_id: self.class_id.ok_or(ComposerError::MissingField)?,
            year_id: self.year_id.ok_or(ComposerError::MissingField)?,
            set_name: self.set_name.clone(),
            books: self
                .selection
                .entries()
                .iter()
                .map(|e| SubmissionBook {
                    book_id: e.book_id,
                    quantity: e.quantity,
                })
                .collect(),
        })
    }
}
