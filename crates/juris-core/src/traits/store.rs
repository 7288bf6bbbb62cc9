use async_trait::async_trait;

use crate::errors::JurisResult;
use crate::models::{Chunk, SearchFilters, TenantId};

/// Read-only vector search over the tenant's ingested evidence.
///
/// The store applies the tenant filter server-side as a second line of
/// defense; the retrieval engine still verifies every returned chunk. The
/// filter is applied before ranking, never as a post-filter over an
/// unscoped top-N pass.
#[async_trait]
pub trait IEvidenceStore: Send + Sync {
    /// Return up to `n` candidate chunks for the query vector, scoped to the
    /// tenant and metadata filters, most similar first.
    async fn search(
        &self,
        tenant_id: &TenantId,
        query_vector: &[f32],
        filters: &SearchFilters,
        n: usize,
    ) -> JurisResult<Vec<Chunk>>;
}
