//! [`VectorStore`] over an existing LanceDB table.

mod columns;
mod process;

pub use process::{parse_metadata, process_search_batch};

use crate::candle::QueryEmbedder;
use crate::config::StoreConfig;
use crate::store::{Document, SearchRequest, StoreError, VectorStore};
use async_trait::async_trait;
use futures::TryStreamExt;
use lancedb::query::{ExecutableQuery, QueryBase};
use lancedb::{connect, Connection, DistanceType, Table};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct LanceStore<E> {
    #[allow(dead_code)]
    connection: Connection,
    table: Table,
    embedder: Arc<E>,
    config: StoreConfig,
}

impl<E: QueryEmbedder> LanceStore<E> {
    pub async fn connect(config: StoreConfig, embedder: Arc<E>) -> Result<Self, StoreError> {
        info!("Connecting to vector store at {}", config.uri);
        let connection = connect(&config.uri)
            .execute()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let table = match connection.open_table(&config.table).execute().await {
            Ok(table) => table,
            Err(lancedb::Error::TableNotFound { .. }) => {
                return Err(StoreError::TableNotFound(config.table.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        info!("Opened table '{}'", config.table);

        Ok(Self {
            connection,
            table,
            embedder,
            config,
        })
    }

    async fn embed_query(&self, query: &str) -> Result<Vec<f32>, StoreError> {
        let embedder = Arc::clone(&self.embedder);
        let query = query.to_string();
        tokio::task::spawn_blocking(move || embedder.embed(&query)).await?
    }
}

#[async_trait]
impl<E: QueryEmbedder> VectorStore for LanceStore<E> {
    #[tracing::instrument(skip(self, request), fields(top_k = request.top_k))]
    async fn similarity_search(&self, request: &SearchRequest) -> Result<Vec<Document>, StoreError> {
        let query_embedding = self.embed_query(&request.query).await?;
        debug!("Generated query embedding, starting vector search...");

        let mut results = self
            .table
            .vector_search(query_embedding)?
            .column(&self.config.vector_column)
            .distance_type(DistanceType::Cosine)
            .limit(request.top_k)
            .execute()
            .await?;

        let mut documents = Vec::new();
        while let Some(rb) = results.try_next().await? {
            documents.extend(process_search_batch(&rb, &self.config, request)?);
        }

        if documents.is_empty() {
            warn!("No documents found for query: {}", request.query);
        } else {
            debug!("Found {} documents", documents.len());
        }
        Ok(documents)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let rows = self.table.count_rows(None).await?;
        debug!("Health check: table '{}' has {} rows", self.config.table, rows);
        Ok(())
    }
}
