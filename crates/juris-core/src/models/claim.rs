//! Claims: atomic factual statements produced by specialists.

use serde::{Deserialize, Serialize};

use crate::models::chunk::ChunkId;
use crate::models::plan::AgentKind;
use crate::models::response::Citation;

/// What a claim says it rests on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimSupport {
    /// A specific chunk id present in the evidence supplied to the agent.
    Evidence(ChunkId),
    /// Explicitly marked as general legal knowledge, no document backing.
    GeneralKnowledge,
}

/// An atomic statement drafted by one specialist.
///
/// `support` is `None` when the specialist failed to tag the claim; that is
/// not an error here; verification treats it as an unsupported claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub text: String,
    pub support: Option<ClaimSupport>,
    pub specialist: AgentKind,
}

impl Claim {
    pub fn evidence(text: impl Into<String>, chunk: ChunkId, specialist: AgentKind) -> Self {
        Self {
            text: text.into(),
            support: Some(ClaimSupport::Evidence(chunk)),
            specialist,
        }
    }

    pub fn general_knowledge(text: impl Into<String>, specialist: AgentKind) -> Self {
        Self {
            text: text.into(),
            support: Some(ClaimSupport::GeneralKnowledge),
            specialist,
        }
    }

    pub fn untagged(text: impl Into<String>, specialist: AgentKind) -> Self {
        Self {
            text: text.into(),
            support: None,
            specialist,
        }
    }

    /// The cited chunk id, if this claim cites evidence.
    pub fn cited_chunk(&self) -> Option<&ChunkId> {
        match &self.support {
            Some(ClaimSupport::Evidence(id)) => Some(id),
            _ => None,
        }
    }
}

/// A claim after the verification pass.
#[derive(Debug, Clone)]
pub struct VerifiedClaim {
    pub claim: Claim,
    /// Entailment support score in [0, 1].
    pub support_score: f64,
    /// Whether the claim survives into the answer.
    pub retained: bool,
    /// Citation attached when retained and evidence-backed.
    pub citation: Option<Citation>,
}
