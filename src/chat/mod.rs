//! The query handler: one similarity search per message, answered with the joined contents.

use crate::constants::{DEFAULT_MESSAGE, TOP_K};
use crate::store::{SearchRequest, StoreError, VectorStore, SIMILARITY_THRESHOLD_ACCEPT_ALL};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ChatEngine<S> {
    store: Arc<S>,
    similarity_threshold: f32,
}

impl<S: VectorStore> ChatEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            similarity_threshold: SIMILARITY_THRESHOLD_ACCEPT_ALL,
        }
    }

    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Missing and empty messages both fall back to [`DEFAULT_MESSAGE`].
    pub fn build_request(&self, message: Option<&str>) -> SearchRequest {
        let query = match message {
            Some(message) if !message.is_empty() => message,
            _ => DEFAULT_MESSAGE,
        };
        SearchRequest::query(query)
            .with_top_k(TOP_K)
            .with_similarity_threshold(self.similarity_threshold)
    }

    pub async fn respond(&self, message: Option<&str>) -> Result<String, StoreError> {
        let request = self.build_request(message);
        info!("Received chat request - query: {}", request.query);

        let documents = self.store.similarity_search(&request).await?;
        if documents.len() > TOP_K {
            warn!(
                "Store returned {} documents for top_k {}, truncating",
                documents.len(),
                TOP_K
            );
        }

        let body = documents
            .iter()
            .map(|document| document.content())
            .take(TOP_K)
            .collect::<Vec<_>>()
            .join(",");

        debug!("Returning {} documents", documents.len().min(TOP_K));
        Ok(body)
    }
}
