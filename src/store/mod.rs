//! Boundary to the vector similarity search store.
//!
//! The query handler only ever talks to a [`VectorStore`]; indexing, embedding and scoring are
//! the store's business. [`lance::LanceStore`] is the implementation used by the binary.

mod document;
mod error;
pub mod lance;
mod search_request;

pub use document::Document;
pub use error::StoreError;
pub use search_request::{SearchRequest, SIMILARITY_THRESHOLD_ACCEPT_ALL};

use async_trait::async_trait;

#[async_trait]
pub trait VectorStore: Send + Sync + 'static {
    /// Returns documents ordered by descending similarity, at most `request.top_k` of them
    /// if the store honours the limit.
    async fn similarity_search(&self, request: &SearchRequest) -> Result<Vec<Document>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
