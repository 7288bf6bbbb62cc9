//! Plan construction, a pure function from intent to agent list.
//!
//! `Safety` and `Verification` are appended here unconditionally; no other
//! code path builds plans, so a classifier that "forgets" them cannot
//! produce a plan without the mandatory stages.

use juris_core::models::{AgentKind, ExecutionPlan};
use juris_core::Intent;

/// The specialists routed to for a recognized intent.
pub fn specialists_for(intent: Intent) -> Vec<AgentKind> {
    match intent {
        Intent::StatutoryInterpretation => vec![AgentKind::Statutory],
        Intent::CaseResearch => vec![AgentKind::CaseLaw],
        Intent::ContractReview => vec![AgentKind::Contract],
        Intent::ComplianceCheck => vec![AgentKind::Compliance],
        Intent::General => vec![AgentKind::GeneralCounsel],
    }
}

/// Build the execution plan for a classified (or unclassified) query.
///
/// An unclassified query runs every specialist rather than guessing one;
/// verification prunes whatever the irrelevant ones produce.
pub fn build_plan(intent: Option<Intent>) -> ExecutionPlan {
    let (intent, specialists) = match intent {
        Some(intent) => (intent, specialists_for(intent)),
        None => (Intent::General, AgentKind::SPECIALISTS.to_vec()),
    };

    let mut agents = Vec::with_capacity(specialists.len() + 2);
    agents.push(AgentKind::Safety);
    agents.extend(specialists);
    agents.push(AgentKind::Verification);

    ExecutionPlan { intent, agents }
}
