//! In-memory evidence store.
//!
//! Tenant-partitioned brute-force cosine search over ingested chunks. Serves
//! tests and local single-process deployments; production deployments plug a
//! real vector store into `IEvidenceStore` instead.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use juris_core::errors::JurisResult;
use juris_core::models::{Chunk, SearchFilters, TenantId};
use juris_core::traits::IEvidenceStore;

use crate::similarity::cosine;

/// Chunks partitioned by tenant. Search never looks outside the requested
/// tenant's partition, so the tenant filter is structural, not a post-filter.
#[derive(Default)]
pub struct InMemoryEvidenceStore {
    partitions: RwLock<HashMap<TenantId, Vec<Chunk>>>,
}

impl InMemoryEvidenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest chunks into their owners' partitions.
    pub fn add_chunks(&self, chunks: Vec<Chunk>) {
        let mut partitions = self.partitions.write().expect("store lock poisoned");
        for chunk in chunks {
            partitions
                .entry(chunk.tenant_id.clone())
                .or_default()
                .push(chunk);
        }
    }

    fn matches(chunk: &Chunk, filters: &SearchFilters) -> bool {
        if let Some(jurisdiction) = &filters.jurisdiction {
            if chunk.metadata.jurisdiction.as_deref() != Some(jurisdiction.as_str()) {
                return false;
            }
        }
        if let Some(document_type) = &filters.document_type {
            if chunk.metadata.document_type.as_deref() != Some(document_type.as_str()) {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl IEvidenceStore for InMemoryEvidenceStore {
    async fn search(
        &self,
        tenant_id: &TenantId,
        query_vector: &[f32],
        filters: &SearchFilters,
        n: usize,
    ) -> JurisResult<Vec<Chunk>> {
        let partitions = self.partitions.read().expect("store lock poisoned");
        let Some(partition) = partitions.get(tenant_id) else {
            debug!(%tenant_id, "no partition for tenant");
            return Ok(Vec::new());
        };

        let mut scored: Vec<(f64, &Chunk)> = partition
            .iter()
            .filter(|c| Self::matches(c, filters))
            .map(|c| (cosine(query_vector, &c.embedding), c))
            .collect();

        // Most similar first; equal scores fall back to id order so results
        // are stable.
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.id.cmp(&b.1.id))
        });

        Ok(scored.into_iter().take(n).map(|(_, c)| c.clone()).collect())
    }
}
