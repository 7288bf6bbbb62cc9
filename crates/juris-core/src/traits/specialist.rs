use async_trait::async_trait;

use crate::models::{AgentKind, AgentOutcome, Query, RetrievalResult};

/// A domain specialist: transforms (query, evidence) into draft claims.
///
/// This is the pool's extension point: adding a new legal domain means
/// implementing this trait and registering the variant, not modifying the
/// orchestrator. `analyze` never returns an error: provider failures are
/// folded into `AgentOutcome::Failure` so sibling specialists keep running.
#[async_trait]
pub trait ISpecialist: Send + Sync {
    /// Which agent this is, for planning, logging, and attribution.
    fn kind(&self) -> AgentKind;

    /// Draft claims for the query against the supplied evidence.
    async fn analyze(&self, query: &Query, evidence: &RetrievalResult) -> AgentOutcome;
}
