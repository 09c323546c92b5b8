//! Sentence embeddings for search queries.

pub mod get_embeddings;
pub mod load_model;

use crate::store::StoreError;
use candle_transformers::models::bert::BertModel;
use tokenizers::Tokenizer;

/// Turns a query into the vector the store searches with.
pub trait QueryEmbedder: Send + Sync + 'static {
    fn embed(&self, text: &str) -> Result<Vec<f32>, StoreError>;
}

/// BERT-family sentence model (e.g. all-MiniLM-L6-v2) running on the CPU.
pub struct BertEmbedder {
    model: BertModel,
    tokenizer: Tokenizer,
}

impl QueryEmbedder for BertEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, StoreError> {
        get_embeddings::get_embeddings(&self.model, &self.tokenizer, text)
            .map_err(|e| StoreError::Embedding(format!("{:#}", e)))
    }
}
