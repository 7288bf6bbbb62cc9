//! Retrieval results and search filters.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::{JurisError, JurisResult};
use crate::models::chunk::{Chunk, ChunkId, TenantId};

/// Metadata filters applied inside the evidence store, before ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub jurisdiction: Option<String>,
    pub document_type: Option<String>,
}

/// A chunk paired with its relevance score for the current query.
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub relevance: f64,
}

/// Ordered, deduplicated, tenant-checked evidence set.
///
/// The constructor enforces the hard invariants rather than assuming them:
/// no duplicate chunk ids, and every chunk's tenant id equal to the query
/// tenant. A tenant mismatch is a `TenantIsolation` error, never a silent
/// filter, since it indicates a broken invariant upstream.
#[derive(Debug, Clone, Default)]
pub struct RetrievalResult {
    chunks: Vec<ScoredChunk>,
}

impl RetrievalResult {
    /// Build a result from ranked chunks, verifying the tenant invariant.
    pub fn new(tenant_id: &TenantId, chunks: Vec<ScoredChunk>) -> JurisResult<Self> {
        let mut seen: HashSet<ChunkId> = HashSet::with_capacity(chunks.len());
        for scored in &chunks {
            if &scored.chunk.tenant_id != tenant_id {
                return Err(JurisError::TenantIsolation {
                    expected: tenant_id.clone(),
                    found: scored.chunk.tenant_id.clone(),
                    chunk_id: scored.chunk.id.clone(),
                });
            }
            if !seen.insert(scored.chunk.id.clone()) {
                return Err(JurisError::Retrieval(
                    crate::errors::RetrievalError::SearchFailed {
                        reason: format!("duplicate chunk id {} in ranked set", scored.chunk.id),
                    },
                ));
            }
        }
        Ok(Self { chunks })
    }

    /// An evidence set with no chunks (retrieval degraded or found nothing).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn chunks(&self) -> &[ScoredChunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Look up a chunk by id.
    pub fn get(&self, id: &ChunkId) -> Option<&Chunk> {
        self.chunks.iter().map(|s| &s.chunk).find(|c| &c.id == id)
    }

    /// Jurisdictions of the retrieved evidence, one entry per chunk that
    /// carries one. Used by the safety gate's mismatch check.
    pub fn jurisdictions(&self) -> Vec<String> {
        self.chunks
            .iter()
            .filter_map(|s| s.chunk.metadata.jurisdiction.clone())
            .collect()
    }
}
