//! RetrievalEngine: orchestrates the full retrieval pipeline.
//!
//! Stage 1: query embedding → tenant-scoped candidate fetch (pool of N).
//! Stage 2: isolation check → dedup → MMR rerank to k.

use std::sync::Arc;

use tracing::{debug, info, warn};

use juris_core::config::RetrievalConfig;
use juris_core::errors::{JurisError, JurisResult, RetrievalError};
use juris_core::models::{Query, RetrievalResult, ScoredChunk};
use juris_core::traits::{IEmbeddingProvider, IEvidenceStore};

use crate::mmr;
use crate::similarity::cosine;

/// The evidence retrieval engine.
pub struct RetrievalEngine {
    store: Arc<dyn IEvidenceStore>,
    embeddings: Arc<dyn IEmbeddingProvider>,
    config: RetrievalConfig,
}

impl RetrievalEngine {
    pub fn new(
        store: Arc<dyn IEvidenceStore>,
        embeddings: Arc<dyn IEmbeddingProvider>,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            store,
            embeddings,
            config,
        }
    }

    /// Run the full retrieval pipeline for one query.
    ///
    /// A tenant mismatch in the store's results is fatal and propagates as
    /// `JurisError::TenantIsolation`; every other failure is an ordinary
    /// retrieval error the caller may degrade on.
    pub async fn retrieve(&self, query: &Query) -> JurisResult<RetrievalResult> {
        let k = query.options.top_k.unwrap_or(self.config.top_k);
        let pool_size = self.config.candidate_pool.max(k);

        // Step 1: Embed the query text. The provider retries transient
        // failures internally; exhaustion surfaces here.
        let query_vector = self.embeddings.embed(&query.text).await.map_err(|e| {
            JurisError::Retrieval(RetrievalError::EmbeddingUnavailable {
                reason: e.to_string(),
            })
        })?;

        // Step 2: Candidate fetch, tenant filter applied inside the store.
        let candidates = self
            .store
            .search(&query.tenant_id, &query_vector, &query.options.filters, pool_size)
            .await
            .map_err(|e| match e {
                fatal @ JurisError::TenantIsolation { .. } => fatal,
                other => JurisError::Retrieval(RetrievalError::SearchFailed {
                    reason: other.to_string(),
                }),
            })?;

        if candidates.is_empty() {
            debug!(query = %query.id, "no candidate evidence found");
            return Ok(RetrievalResult::empty());
        }

        info!(
            query = %query.id,
            candidates = candidates.len(),
            pool_size,
            "candidate fetch complete"
        );

        // Step 3: Verify the isolation invariant on every returned chunk.
        // The store already filters by tenant; this check catches a broken
        // store rather than trusting it. Dimension agreement is checked here
        // too, before cosine scoring silently zeroes every mismatched pair.
        for chunk in &candidates {
            if chunk.tenant_id != query.tenant_id {
                warn!(
                    query = %query.id,
                    chunk = %chunk.id,
                    "evidence store returned a cross-tenant chunk"
                );
                return Err(JurisError::TenantIsolation {
                    expected: query.tenant_id.clone(),
                    found: chunk.tenant_id.clone(),
                    chunk_id: chunk.id.clone(),
                });
            }
            if chunk.embedding.len() != query_vector.len() {
                return Err(JurisError::Retrieval(RetrievalError::DimensionMismatch {
                    query: query_vector.len(),
                    store: chunk.embedding.len(),
                }));
            }
        }

        // Step 4: Score against the query and drop duplicate ids (first
        // occurrence wins; the pool arrives most-similar-first).
        let mut seen = std::collections::HashSet::new();
        let scored: Vec<ScoredChunk> = candidates
            .into_iter()
            .filter(|c| seen.insert(c.id.clone()))
            .map(|chunk| {
                let relevance = cosine(&query_vector, &chunk.embedding);
                ScoredChunk { chunk, relevance }
            })
            .collect();

        // Step 5: MMR rerank to k diverse, relevant chunks.
        let selected = mmr::rerank(scored, self.config.mmr_lambda, k);

        debug!(query = %query.id, selected = selected.len(), k, "mmr rerank complete");

        RetrievalResult::new(&query.tenant_id, selected)
    }
}
