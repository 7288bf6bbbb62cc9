//! Per-specialist invocation outcomes.

use crate::models::claim::Claim;

/// Result of one specialist invocation.
///
/// Failures and timeouts are data, not control flow: the orchestrator
/// records them and continues with the remaining specialists.
#[derive(Debug, Clone)]
pub enum AgentOutcome {
    Success { claims: Vec<Claim> },
    Failure { reason: String },
    TimedOut,
}

impl AgentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AgentOutcome::Success { .. })
    }

    /// Draft claims, empty for failures and timeouts.
    pub fn claims(&self) -> &[Claim] {
        match self {
            AgentOutcome::Success { claims } => claims,
            _ => &[],
        }
    }

    /// Short label for logs and audit records.
    pub fn status(&self) -> &'static str {
        match self {
            AgentOutcome::Success { .. } => "success",
            AgentOutcome::Failure { .. } => "failure",
            AgentOutcome::TimedOut => "timeout",
        }
    }
}
