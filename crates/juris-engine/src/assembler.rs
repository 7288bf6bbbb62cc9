//! Final response assembly.
//!
//! Input is the verified claim set in answer order; output is the prose
//! answer with citation markers, the deduplicated citation list, and the
//! attribution set. Only retained claims make it into the answer.

use std::collections::{BTreeSet, HashMap};

use juris_agents::prompts::LEGAL_DISCLAIMER;
use juris_core::models::{
    AgentKind, ChunkId, ExecutionPlan, FinalResponse, Query, SafetyStatus, SafetyVerdict,
    VerifiedClaim,
};
use juris_verification::citations::ordered_citations;

const NO_FINDINGS: &str = "\
No sufficiently supported findings were available for this query. The \
retrieved documents did not substantiate the analysis, so no unverified \
statements are presented.";

fn section_heading(kind: AgentKind) -> &'static str {
    match kind {
        AgentKind::Statutory => "Statutory interpretation",
        AgentKind::CaseLaw => "Case law",
        AgentKind::Contract => "Contract analysis",
        AgentKind::Compliance => "Compliance",
        AgentKind::GeneralCounsel => "General analysis",
        AgentKind::Safety | AgentKind::Verification => "Analysis",
    }
}

/// A refused request: no analysis, no citations, attribution to the safety
/// stage alone.
pub fn refusal(verdict: &SafetyVerdict) -> FinalResponse {
    let reason = verdict
        .reason
        .clone()
        .unwrap_or_else(|| "The request cannot be served.".to_string());
    FinalResponse {
        answer: format!("This request was declined. {reason}"),
        citations: Vec::new(),
        confidence_score: 0.0,
        safety_check: SafetyStatus::Refuse,
        agents_used: BTreeSet::from([AgentKind::Safety]),
        reason: Some(reason),
    }
}

/// Assemble the answer from verified claims, in plan order.
pub fn assemble(
    query: &Query,
    plan: &ExecutionPlan,
    verified: &[VerifiedClaim],
    confidence_score: f64,
    verdict: &SafetyVerdict,
) -> FinalResponse {
    let citations = if query.options.include_citations {
        ordered_citations(verified)
    } else {
        Vec::new()
    };
    let marker_of: HashMap<&ChunkId, usize> = citations
        .iter()
        .enumerate()
        .map(|(i, c)| (&c.chunk_id, i + 1))
        .collect();

    let mut agents_used: BTreeSet<AgentKind> = BTreeSet::new();
    let mut sections: Vec<String> = Vec::new();

    for specialist in plan.specialists() {
        let mut sentences: Vec<String> = Vec::new();
        for v in verified {
            if !v.retained || v.claim.specialist != specialist {
                continue;
            }
            let marker = v
                .citation
                .as_ref()
                .and_then(|c| marker_of.get(&c.chunk_id))
                .map(|n| format!(" [{n}]"))
                .unwrap_or_default();
            sentences.push(format!("{}{marker}", v.claim.text));
        }
        if !sentences.is_empty() {
            agents_used.insert(specialist);
            sections.push(format!("{}: {}", section_heading(specialist), sentences.join(" ")));
        }
    }

    let mut paragraphs: Vec<String> = Vec::new();
    if let (SafetyStatus::Warn, Some(reason)) = (verdict.status, verdict.reason.as_deref()) {
        paragraphs.push(format!("Note: {reason}"));
    }
    if sections.is_empty() {
        paragraphs.push(NO_FINDINGS.to_string());
    } else {
        paragraphs.extend(sections);
    }
    if !citations.is_empty() {
        let listing = citations
            .iter()
            .enumerate()
            .map(|(i, c)| format!("[{}] {}", i + 1, c.label))
            .collect::<Vec<_>>()
            .join("\n");
        paragraphs.push(format!("Sources:\n{listing}"));
    }
    paragraphs.push(LEGAL_DISCLAIMER.to_string());

    FinalResponse {
        answer: paragraphs.join("\n\n"),
        citations,
        confidence_score,
        safety_check: verdict.status,
        agents_used,
        reason: verdict.reason.clone(),
    }
}
