//! Request-scoped data model.
//!
//! Everything here is created and consumed within a single query's
//! processing; only `AuditEvent` copies outlive the response, via the
//! external audit sink.

mod audit;
mod chunk;
mod claim;
mod outcome;
mod plan;
mod query;
mod response;
mod retrieval;

pub use audit::{AuditEvent, AuditKind};
pub use chunk::{Chunk, ChunkId, ChunkMetadata, TenantId};
pub use claim::{Claim, ClaimSupport, VerifiedClaim};
pub use outcome::AgentOutcome;
pub use plan::{AgentKind, ExecutionPlan};
pub use query::{Query, QueryOptions};
pub use response::{Citation, FinalResponse, SafetyStatus, SafetyVerdict};
pub use retrieval::{RetrievalResult, ScoredChunk, SearchFilters};
