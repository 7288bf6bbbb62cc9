//! The incoming legal query. Immutable once created.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{JurisError, JurisResult};
use crate::models::chunk::TenantId;
use crate::models::retrieval::SearchFilters;

/// Caller-controlled options for a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Attach document citations to the response. Default: true.
    pub include_citations: bool,
    /// Override the configured number of evidence chunks to retrieve.
    pub top_k: Option<usize>,
    /// Hard metadata filters for the evidence search. Unlike the
    /// jurisdiction *hint* on the query (which only drives the mismatch
    /// warning), these restrict what is retrievable.
    pub filters: SearchFilters,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            include_citations: true,
            top_k: None,
            filters: SearchFilters::default(),
        }
    }
}

/// A natural-language legal query scoped to one tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub id: Uuid,
    pub text: String,
    pub tenant_id: TenantId,
    /// Jurisdiction the caller expects the answer to apply to (e.g. "NY").
    pub jurisdiction: Option<String>,
    pub options: QueryOptions,
}

impl Query {
    /// Build a validated query. Empty text or a missing tenant id is a
    /// `Validation` error, rejected before any pipeline stage runs.
    pub fn new(
        text: impl Into<String>,
        tenant_id: TenantId,
        jurisdiction: Option<String>,
        options: QueryOptions,
    ) -> JurisResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(JurisError::validation("query text is empty"));
        }
        if tenant_id.is_empty() {
            return Err(JurisError::validation("tenant id is missing"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            text,
            tenant_id,
            jurisdiction,
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_text() {
        let err = Query::new("   ", TenantId::new("t1"), None, QueryOptions::default());
        assert!(matches!(err, Err(JurisError::Validation { .. })));
    }

    #[test]
    fn rejects_missing_tenant() {
        let err = Query::new("what is a lease?", TenantId::new(""), None, QueryOptions::default());
        assert!(matches!(err, Err(JurisError::Validation { .. })));
    }
}
