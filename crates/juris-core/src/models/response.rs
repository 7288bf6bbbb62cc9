//! Safety verdicts and the final structured answer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::chunk::ChunkId;
use crate::models::plan::AgentKind;

/// Outcome of the safety gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyStatus {
    Pass,
    Warn,
    Refuse,
}

/// Safety status with its explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyVerdict {
    pub status: SafetyStatus,
    pub reason: Option<String>,
}

impl SafetyVerdict {
    pub fn pass() -> Self {
        Self {
            status: SafetyStatus::Pass,
            reason: None,
        }
    }

    pub fn warn(reason: impl Into<String>) -> Self {
        Self {
            status: SafetyStatus::Warn,
            reason: Some(reason.into()),
        }
    }

    pub fn refuse(reason: impl Into<String>) -> Self {
        Self {
            status: SafetyStatus::Refuse,
            reason: Some(reason.into()),
        }
    }

    pub fn is_refuse(&self) -> bool {
        self.status == SafetyStatus::Refuse
    }

    /// Downgrade PASS to WARN with the given reason; REFUSE and an existing
    /// WARN keep their original reason.
    pub fn with_warning(self, reason: String) -> Self {
        match self.status {
            SafetyStatus::Pass => SafetyVerdict::warn(reason),
            _ => self,
        }
    }
}

/// A document citation surfaced in the final answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    pub chunk_id: ChunkId,
    /// Human-readable source label ("Employment Act 1996, s. 94").
    pub label: String,
    pub source_document_id: String,
    pub jurisdiction: Option<String>,
}

/// The final payload returned to the serving layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalResponse {
    pub answer: String,
    /// Ordered by first appearance in the answer, deduplicated by chunk id.
    pub citations: Vec<Citation>,
    /// Aggregate evidence-support confidence in [0, 1].
    pub confidence_score: f64,
    pub safety_check: SafetyStatus,
    /// Specialists that contributed at least one retained claim; exactly
    /// `{Safety}` when the request was refused.
    pub agents_used: BTreeSet<AgentKind>,
    /// Present on REFUSE and WARN.
    pub reason: Option<String>,
}
