use crate::constants::TOP_K;

/// Accepts every document regardless of its score.
pub const SIMILARITY_THRESHOLD_ACCEPT_ALL: f32 = 0.0;

/// Parameters of a single similarity search. Built per call and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub top_k: usize,
    pub similarity_threshold: f32,
}

impl SearchRequest {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: TOP_K,
            similarity_threshold: SIMILARITY_THRESHOLD_ACCEPT_ALL,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Clamped to `[0, 1]`.
    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn accepts_all(&self) -> bool {
        self.similarity_threshold <= SIMILARITY_THRESHOLD_ACCEPT_ALL
    }

    pub fn accepts(&self, similarity: f32) -> bool {
        self.accepts_all() || similarity >= self.similarity_threshold
    }
}
