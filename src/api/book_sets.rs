//! Book-set endpoints.

use async_trait::async_trait;

use crate::domain::{ApiError, BookSetFilter, BookSetProvider};
use crate::models::{BookSet, BookSetSubmission};

use super::ApiClient;

#[async_trait]
impl BookSetProvider for ApiClient {
    async fn list_book_sets(&self, filter: &BookSetFilter) -> Result<Vec<BookSet>, ApiError> {
        self.get_json_with_query("/book-set", filter).await
    }

    async fn get_book_set(&self, id: i32) -> Result<BookSet, ApiError> {
        self.get_json(&format!("/book-set/{}", id)).await
    }

    async fn create_book_set(&self, submission: &BookSetSubmission) -> Result<(), ApiError> {
        tracing::info!(
            set_name = %submission.set_name,
            books = submission.books.len(),
            "create book set"
        );
        self.post_json("/book-set/create", submission).await
    }

    async fn update_book_set(
        &self,
        id: i32,
        submission: &BookSetSubmission,
    ) -> Result<(), ApiError> {
        tracing::info!(id, set_name = %submission.set_name, "update book set");
        self.put_json(&format!("/book-set/{}", id), submission).await
    }

    async fn delete_book_set(&self, id: i32) -> Result<(), ApiError> {
        tracing::info!(id, "delete book set");
        self.delete(&format!("/book-set/{}", id)).await
    }
}
