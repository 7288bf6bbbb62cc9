use serde::{Deserialize, Serialize};

/// Configuration for evidence retrieval and MMR reranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of evidence chunks returned to the specialists. Default: 5.
    pub top_k: usize,
    /// Candidate pool size fetched from the store before reranking.
    /// Must be >= `top_k`. Default: 20.
    pub candidate_pool: usize,
    /// MMR relevance/diversity trade-off, in (0, 1]. 1.0 is pure relevance.
    /// Default: 0.6.
    pub mmr_lambda: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            candidate_pool: 20,
            mmr_lambda: 0.6,
        }
    }
}
