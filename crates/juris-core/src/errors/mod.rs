//! Error taxonomy for the query pipeline.
//!
//! Recoverable failures (upstream timeouts, single-specialist failures) are
//! absorbed into degraded outcomes and never appear here; only conditions
//! that must abort a request surface as `JurisError`.

mod agent_error;
mod retrieval_error;
mod upstream_error;

pub use agent_error::AgentError;
pub use retrieval_error::RetrievalError;
pub use upstream_error::UpstreamError;

use crate::models::{ChunkId, TenantId};

/// Result alias used across the workspace.
pub type JurisResult<T> = Result<T, JurisError>;

/// Top-level error for the Juris engine.
#[derive(Debug, thiserror::Error)]
pub enum JurisError {
    /// Malformed query, rejected before any stage runs.
    #[error("invalid query: {reason}")]
    Validation { reason: String },

    /// A chunk crossed a tenant boundary. Fatal: aborts the request with no
    /// partial answer and raises a security-alert audit event.
    #[error("tenant isolation violation: chunk {chunk_id} belongs to tenant {found}, query tenant is {expected}")]
    TenantIsolation {
        expected: TenantId,
        found: TenantId,
        chunk_id: ChunkId,
    },

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl JurisError {
    /// Convenience constructor for validation failures.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
}
