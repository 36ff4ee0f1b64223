//! Submission flow: Editing -> Submitting -> Succeeded, or back to Editing
//! with the failure message and the draft intact.

use std::time::Duration;

use crate::domain::{BookSetProvider, ComposerError};
use crate::models::{Book, BookSet};

use super::draft::BookSetDraft;

/// How long the shell keeps the success message visible before navigating
/// back to the list view.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Whether the session creates a new set or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Create,
    Edit(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    Submitting,
    Succeeded,
}

/// One create/edit session: the draft plus the submit state machine. The
/// session owns its draft exclusively; the shell reads state and messages
/// back after each event.
#[derive(Debug, Clone)]
pub struct ComposerSession {
    mode: SessionMode,
    state: SessionState,
    draft: BookSetDraft,
    error: Option<String>,
    success: Option<String>,
}

impl ComposerSession {
    /// Fresh session for the create flow.
    pub fn create() -> Self {
        Self {
            mode: SessionMode::Create,
            state: SessionState::Editing,
            draft: BookSetDraft::new(),
            error: None,
            success: None,
        }
    }

    /// Edit-mode session hydrated from a persisted set.
    pub fn edit(book_set: &BookSet) -> Self {
        Self {
            mode: SessionMode::Edit(book_set.id),
            state: SessionState::Editing,
            draft: BookSetDraft::from_persisted(book_set),
            error: None,
            success: None,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn draft(&self) -> &BookSetDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    fn editing(&self) -> bool {
        self.state == SessionState::Editing
    }

    // Mutations are accepted only while editing; a submit in flight runs to
    // completion before the draft can change again.

    pub fn set_board(&mut self, id: Option<i32>) -> bool {
        if !self.editing() {
            return false;
        }
        self.draft.board_id = id;
        true
    }

    pub fn set_medium(&mut self, id: Option<i32>) -> bool {
        if !self.editing() {
            return false;
        }
        self.draft.medium_id = id;
        true
    }

    pub fn set_class(&mut self, id: Option<i32>) -> bool {
        if !self.editing() {
            return false;
        }
        self.draft.class_id = id;
        true
    }

    pub fn set_year(&mut self, id: Option<i32>) -> bool {
        if !self.editing() {
            return false;
        }
        self.draft.year_id = id;
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        if !self.editing() {
            return false;
        }
        self.draft.set_name = name.into();
        true
    }

    /// Add a catalog book to the selection. Returns whether anything changed.
    pub fn add_book(&mut self, book_id: i32, catalog: &[Book]) -> bool {
        if !self.editing() {
            return false;
        }
        self.draft.selection.add(book_id, catalog).is_some()
    }

    pub fn remove_book(&mut self, book_id: i32) -> bool {
        if !self.editing() {
            return false;
        }
        self.draft.selection.remove(book_id);
        true
    }

    pub fn set_quantity(&mut self, book_id: i32, raw: &str) -> bool {
        if !self.editing() {
            return false;
        }
        self.draft.selection.set_quantity(book_id, raw);
        true
    }

    /// Lightweight gate for enabling the submit control; full validation
    /// runs on the submit attempt itself.
    pub fn can_submit(&self) -> bool {
        self.editing() && !self.draft.set_name.trim().is_empty()
    }

    /// Validate and send the draft. On success the session parks in
    /// `Succeeded` and the shell navigates after [`SUCCESS_REDIRECT_DELAY`];
    /// on failure it returns to `Editing` with the message set and the draft
    /// untouched, so the operator can correct and resubmit.
    pub async fn submit<P>(&mut self, provider: &P) -> Result<(), ComposerError>
    where
        P: BookSetProvider + ?Sized,
    {
        if !self.editing() {
            return Err(ComposerError::Submission(
                "A submission is already in progress".to_string(),
            ));
        }
        self.error = None;
        self.success = None;

        let submission = match self.draft.validate().and_then(|_| self.draft.to_submission()) {
            Ok(s) => s,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        self.state = SessionState::Submitting;
        let result = match self.mode {
            SessionMode::Create => provider.create_book_set(&submission).await,
            SessionMode::Edit(id) => provider.update_book_set(id, &submission).await,
        };

        match result {
            Ok(()) => {
                self.state = SessionState::Succeeded;
                self.success = Some(match self.mode {
                    SessionMode::Create => "Book set created successfully!".to_string(),
                    SessionMode::Edit(_) => "Book set updated successfully!".to_string(),
                });
                tracing::info!(mode = ?self.mode, "book set saved");
                Ok(())
            }
            Err(e) => {
                let message = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| fallback_message(self.mode));
                tracing::warn!(error = %e, "book set submission rejected");
                self.state = SessionState::Editing;
                self.error = Some(message.clone());
                Err(ComposerError::Submission(message))
            }
        }
    }
}

fn fallback_message(mode: SessionMode) -> String {
    match mode {
        SessionMode::Create => "Failed to create book set".to_string(),
        SessionMode::Edit(_) => "Failed to update book set".to_string(),
    }
}
