use thiserror::Error;

/// Everything that can go wrong between issuing a search and receiving documents.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Table '{0}' not found; it must be provisioned before starting the service")]
    TableNotFound(String),
    #[error("Embedding error: {0}")]
    Embedding(String),
    #[error("Query error: {0}")]
    Query(#[from] lancedb::Error),
    #[error("Unexpected result layout: {0}")]
    Schema(String),
    #[error("Search task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
