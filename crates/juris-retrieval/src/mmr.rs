//! Maximal Marginal Relevance reranking.
//!
//! Greedy selection trading relevance to the query against redundancy with
//! already-selected chunks:
//!
//! `score(d) = lambda * relevance(d) - (1 - lambda) * max_s cos(d, s)`
//!
//! Ties break deterministically on the lower chunk id, so the output is
//! stable across runs regardless of candidate order.

use juris_core::models::ScoredChunk;

use crate::similarity::cosine;

/// Pick up to `k` diverse, relevant chunks from the candidate pool.
///
/// Candidate order does not matter; the scoring handles arbitrary input.
/// Embedding-space cosine drives the diversity term.
pub fn rerank(candidates: Vec<ScoredChunk>, lambda: f64, k: usize) -> Vec<ScoredChunk> {
    if k == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let mut remaining = candidates;
    let mut selected: Vec<ScoredChunk> = Vec::with_capacity(k.min(remaining.len()));

    while selected.len() < k && !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_score = f64::NEG_INFINITY;

        for (i, candidate) in remaining.iter().enumerate() {
            let redundancy = selected
                .iter()
                .map(|s| cosine(&candidate.chunk.embedding, &s.chunk.embedding))
                .fold(0.0f64, f64::max);

            let score = lambda * candidate.relevance - (1.0 - lambda) * redundancy;

            let wins = score > best_score
                || (score == best_score && candidate.chunk.id < remaining[best_idx].chunk.id);
            if wins {
                best_score = score;
                best_idx = i;
            }
        }

        selected.push(remaining.swap_remove(best_idx));
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use juris_core::models::{Chunk, ChunkId, ChunkMetadata, TenantId};

    fn scored(id: &str, embedding: Vec<f32>, relevance: f64) -> ScoredChunk {
        ScoredChunk {
            chunk: Chunk {
                id: ChunkId::new(id),
                tenant_id: TenantId::new("t1"),
                embedding,
                text: String::new(),
                metadata: ChunkMetadata::default(),
            },
            relevance,
        }
    }

    #[test]
    fn never_selects_more_than_k() {
        let pool = vec![
            scored("a", vec![1.0, 0.0], 0.9),
            scored("b", vec![0.0, 1.0], 0.8),
            scored("c", vec![0.5, 0.5], 0.7),
        ];
        assert_eq!(rerank(pool, 0.6, 2).len(), 2);
    }

    #[test]
    fn diversity_beats_marginal_relevance_gain() {
        // Three near-duplicates slightly more relevant than one distinct
        // chunk. With k = 2 the distinct chunk must win the second slot.
        let pool = vec![
            scored("dup-1", vec![1.0, 0.0, 0.0], 0.95),
            scored("dup-2", vec![0.99, 0.01, 0.0], 0.94),
            scored("dup-3", vec![0.98, 0.02, 0.0], 0.93),
            scored("distinct", vec![0.0, 0.0, 1.0], 0.60),
        ];
        let picked = rerank(pool, 0.5, 2);
        let ids: Vec<&str> = picked.iter().map(|s| s.chunk.id.as_str()).collect();
        assert_eq!(ids, vec!["dup-1", "distinct"]);
    }

    #[test]
    fn tie_breaks_on_lower_chunk_id() {
        // Identical embeddings and relevance: selection order must follow id.
        let pool = vec![
            scored("chunk-b", vec![1.0, 0.0], 0.5),
            scored("chunk-a", vec![1.0, 0.0], 0.5),
        ];
        let picked = rerank(pool, 0.7, 1);
        assert_eq!(picked[0].chunk.id.as_str(), "chunk-a");
    }

    #[test]
    fn pool_exhaustion_returns_everything() {
        let pool = vec![scored("a", vec![1.0], 0.9)];
        assert_eq!(rerank(pool, 0.6, 5).len(), 1);
    }
}
