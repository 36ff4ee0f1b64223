//! Master-data endpoints: the five catalogs plus create/update/delete.

use async_trait::async_trait;

use crate::domain::{ApiError, MasterDataProvider};
use crate::master_forms::{MasterKind, MasterPayload};
use crate::models::{AcademicYear, Board, Book, Medium, SchoolClass};

use super::ApiClient;

#[async_trait]
impl MasterDataProvider for ApiClient {
    async fn get_boards(&self) -> Result<Vec<Board>, ApiError> {
        self.get_json("/master/boards").await
    }

    async fn get_mediums(&self) -> Result<Vec<Medium>, ApiError> {
        self.get_json("/master/mediums").await
    }

    async fn get_classes(&self) -> Result<Vec<SchoolClass>, ApiError> {
        self.get_json("/master/classes").await
    }

    async fn get_academic_years(&self) -> Result<Vec<AcademicYear>, ApiError> {
        self.get_json("/master/academic-years").await
    }

    async fn get_books(&self) -> Result<Vec<Book>, ApiError> {
        self.get_json("/master/books").await
    }

    async fn create_master(
        &self,
        kind: MasterKind,
        payload: &MasterPayload,
    ) -> Result<(), ApiError> {
        tracing::info!(kind = kind.as_segment(), "create master record");
        self.post_json(&format!("/master/{}", kind.as_segment()), payload)
            .await
    }

    async fn update_master(
        &self,
        kind: MasterKind,
        id: i32,
        payload: &MasterPayload,
    ) -> Result<(), ApiError> {
        tracing::info!(kind = kind.as_segment(), id, "update master record");
        self.put_json(&format!("/master/{}/{}", kind.as_segment(), id), payload)
            .await
    }

    async fn delete_master(&self, kind: MasterKind, id: i32) -> Result<(), ApiError> {
        tracing::info!(kind = kind.as_segment(), id, "delete master record");
        self.delete(&format!("/master/{}/{}", kind.as_segment(), id))
            .await
    }
}
