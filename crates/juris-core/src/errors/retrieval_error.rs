/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("evidence search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("query embedding unavailable: {reason}")]
    EmbeddingUnavailable { reason: String },

    #[error("embedding dimension mismatch: query {query}, store {store}")]
    DimensionMismatch { query: usize, store: usize },
}
