//! The domain specialists, one module per legal domain.
//!
//! Every specialist follows the same shape: format the evidence, call the
//! completion provider with its own system prompt, decode the claims array.
//! Provider errors and malformed output become `AgentOutcome` data at this
//! boundary so sibling specialists are unaffected.

mod case_law;
mod compliance;
mod contract;
mod general;
mod statutory;

pub use case_law::CaseLawResearcher;
pub use compliance::ComplianceChecker;
pub use contract::ContractAnalyzer;
pub use general::GeneralCounsel;
pub use statutory::StatutoryInterpreter;

use std::sync::Arc;

use tracing::{debug, warn};

use juris_core::models::{AgentKind, AgentOutcome, Query, RetrievalResult};
use juris_core::traits::{CompletionRequest, ICompletionProvider};

use crate::parse;

/// Render the evidence set for a specialist prompt, chunk ids included so
/// claims can cite them.
fn format_evidence(evidence: &RetrievalResult) -> String {
    if evidence.is_empty() {
        return "No documents were retrieved. Base your claims on general legal \
                knowledge and mark every one of them \"general-knowledge\"."
            .to_string();
    }
    evidence
        .chunks()
        .iter()
        .map(|s| {
            let c = &s.chunk;
            format!(
                "[{}] {} (jurisdiction: {})\n{}",
                c.id,
                c.source_label(),
                c.metadata.jurisdiction.as_deref().unwrap_or("unknown"),
                c.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Shared analyze body for all completion-backed specialists.
async fn draft_claims(
    kind: AgentKind,
    provider: &Arc<dyn ICompletionProvider>,
    system_prompt: String,
    query: &Query,
    evidence: &RetrievalResult,
) -> AgentOutcome {
    let user = format!(
        "User query: {}\n\nEvidence:\n{}",
        query.text,
        format_evidence(evidence)
    );
    let request = CompletionRequest::new(system_prompt, user);

    match provider.complete(&request).await {
        Ok(content) => match parse::parse_claims(&content, kind, evidence) {
            Ok(claims) => {
                debug!(agent = %kind, claims = claims.len(), "specialist drafted claims");
                AgentOutcome::Success { claims }
            }
            Err(e) => {
                warn!(agent = %kind, error = %e, "specialist output malformed");
                AgentOutcome::Failure {
                    reason: e.to_string(),
                }
            }
        },
        Err(e) => {
            warn!(agent = %kind, error = %e, "specialist completion failed");
            AgentOutcome::Failure {
                reason: e.to_string(),
            }
        }
    }
}
