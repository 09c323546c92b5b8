use crate::store::{Document, SearchRequest, StoreError, VectorStore};
use async_trait::async_trait;
use std::sync::Mutex;

/// Hands back canned documents and remembers every request it received.
pub struct StubStore {
    documents: Vec<Document>,
    fail: bool,
    requests: Mutex<Vec<SearchRequest>>,
}

impl StubStore {
    pub fn returning(contents: &[&str]) -> Self {
        let documents = contents
            .iter()
            .enumerate()
            .map(|(i, content)| Document::new(format!("doc-{}", i), *content))
            .collect();
        Self {
            documents,
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_count(count: usize) -> Self {
        let contents: Vec<String> = (0..count).map(|i| format!("D{}", i)).collect();
        let contents: Vec<&str> = contents.iter().map(String::as_str).collect();
        Self::returning(&contents)
    }

    pub fn failing() -> Self {
        Self {
            documents: Vec::new(),
            fail: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl VectorStore for StubStore {
    async fn similarity_search(&self, request: &SearchRequest) -> Result<Vec<Document>, StoreError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(StoreError::Connection("connection refused".to_string()));
        }
        Ok(self.documents.clone())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Connection("connection refused".to_string()));
        }
        Ok(())
    }
}
