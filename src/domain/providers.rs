//! Collaborator contract definitions
//!
//! These traits define what the composer needs from the inventory API.
//! Implementations live in the api layer.

use async_trait::async_trait;
use serde::Serialize;

use super::ApiError;
use crate::master_forms::{MasterKind, MasterPayload};
use crate::models::{AcademicYear, Board, Book, BookSet, BookSetSubmission, Medium, SchoolClass};

/// Filter criteria for book-set listings. Unset fields are omitted from the
/// query string.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BookSetFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_id: Option<i32>,
}

/// Read access to the five reference catalogs, plus master-data maintenance.
#[async_trait]
pub trait MasterDataProvider: Send + Sync {
    async fn get_boards(&self) -> Result<Vec<Board>, ApiError>;

    async fn get_mediums(&self) -> Result<Vec<Medium>, ApiError>;

    async fn get_classes(&self) -> Result<Vec<SchoolClass>, ApiError>;

    async fn get_academic_years(&self) -> Result<Vec<AcademicYear>, ApiError>;

    async fn get_books(&self) -> Result<Vec<Book>, ApiError>;

    /// Create a master-data record of the payload's kind
    async fn create_master(
        &self,
        kind: MasterKind,
        payload: &MasterPayload,
    ) -> Result<(), ApiError>;

    /// Update an existing master-data record
    async fn update_master(
        &self,
        kind: MasterKind,
        id: i32,
        payload: &MasterPayload,
    ) -> Result<(), ApiError>;

    /// Delete a master-data record
    async fn delete_master(&self, kind: MasterKind, id: i32) -> Result<(), ApiError>;
}

/// Book-set persistence, as exposed by the inventory API.
#[async_trait]
pub trait BookSetProvider: Send + Sync {
    /// List book sets, optionally narrowed by the filter
    async fn list_book_sets(&self, filter: &BookSetFilter) -> Result<Vec<BookSet>, ApiError>;

    /// Fetch one book set with its embedded items
    async fn get_book_set(&self, id: i32) -> Result<BookSet, ApiError>;

    /// Persist a new book set
    async fn create_book_set(&self, submission: &BookSetSubmission) -> Result<(), ApiError>;

    /// Replace an existing book set
    async fn update_book_set(
        &self,
        id: i32,
        submission: &BookSetSubmission,
    ) -> Result<(), ApiError>;

    /// Delete a book set
    async fn delete_book_set(&self, id: i32) -> Result<(), ApiError>;
}
