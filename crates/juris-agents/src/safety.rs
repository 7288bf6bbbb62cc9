//! The safety gate: policy checks that can warn or refuse.
//!
//! A deterministic regex rule pass runs before any completion call so the
//! clear-cut refusals never depend on the model being up. The
//! completion-backed assessment covers everything subtler; if that call
//! fails the verdict degrades to WARN, never to a silent PASS.

use std::collections::HashMap;
use std::sync::Arc;

use regex::RegexSet;
use serde::Deserialize;
use tracing::{debug, warn};

use juris_core::models::{Query, SafetyStatus, SafetyVerdict};
use juris_core::traits::{CompletionRequest, ICompletionProvider};

use crate::parse::extract_json;
use crate::prompts::SAFETY_POLICY_PROMPT;

/// Phrasings that request help with an unlawful act.
const UNLAWFUL_PATTERNS: &[&str] = &[
    r"(?i)\bhide\b.{0,40}\basset",
    r"(?i)\bconceal\b.{0,40}\b(asset|income|evidence)",
    r"(?i)\bevad(e|ing)\b.{0,40}\b(tax|court|subpoena|order)",
    r"(?i)\bdestroy\b.{0,30}\bevidence\b",
    r"(?i)\blaunder",
    r"(?i)\bforge\b.{0,30}\b(signature|document)",
    r"(?i)without\s+(getting\s+caught|being\s+detected)",
    r"(?i)\b(circumvent|get\s+around)\b.{0,40}\b(law|court\s+order|regulation)",
];

/// Phrasings that demand individualized legal advice as a directive rather
/// than informational analysis.
const DIRECTIVE_PATTERNS: &[&str] = &[
    r"(?i)tell\s+me\s+exactly\s+what\s+to\s+do",
    r"(?i)what\s+(exactly\s+)?should\s+i\s+do\s+in\s+my\s+(case|situation|lawsuit)",
    r"(?i)give\s+me\s+(specific\s+)?legal\s+advice\s+for\s+my",
    r"(?i)represent\s+me\b",
];

#[derive(Deserialize)]
struct PolicyAssessment {
    safety_check: String,
    #[serde(default)]
    reason: Option<String>,
}

/// Evaluates queries against jurisdiction and policy rules; can
/// short-circuit the whole pipeline with a refusal.
pub struct SafetyGate {
    completion: Arc<dyn ICompletionProvider>,
    unlawful: RegexSet,
    directive: RegexSet,
}

impl SafetyGate {
    pub fn new(completion: Arc<dyn ICompletionProvider>) -> Self {
        Self {
            completion,
            unlawful: RegexSet::new(UNLAWFUL_PATTERNS).expect("unlawful patterns compile"),
            directive: RegexSet::new(DIRECTIVE_PATTERNS).expect("directive patterns compile"),
        }
    }

    /// Query-time check. Runs concurrently with retrieval; the jurisdiction
    /// comparison happens later via [`SafetyGate::jurisdiction_check`].
    pub async fn check(&self, query: &Query) -> SafetyVerdict {
        if self.unlawful.is_match(&query.text) {
            return SafetyVerdict::refuse(
                "The request asks for assistance with an unlawful act. This platform \
                 provides general legal information only.",
            );
        }
        if self.directive.is_match(&query.text) {
            return SafetyVerdict::refuse(
                "The request asks for individualized legal advice, which this platform \
                 cannot provide. Please consult a qualified attorney.",
            );
        }

        let request = CompletionRequest::deterministic(SAFETY_POLICY_PROMPT, &query.text);
        match self.completion.complete(&request).await {
            Ok(content) => self.decode_assessment(&content),
            Err(e) => {
                warn!(error = %e, "safety assessment unavailable, degrading to WARN");
                SafetyVerdict::warn(format!("Safety check degraded: {e}. Proceed with caution."))
            }
        }
    }

    fn decode_assessment(&self, content: &str) -> SafetyVerdict {
        match serde_json::from_str::<PolicyAssessment>(extract_json(content)) {
            Ok(assessment) => {
                let status = match assessment.safety_check.to_ascii_uppercase().as_str() {
                    "PASS" => SafetyStatus::Pass,
                    "REFUSE" => SafetyStatus::Refuse,
                    // Unknown labels are treated conservatively.
                    _ => SafetyStatus::Warn,
                };
                debug!(?status, "safety assessment decoded");
                SafetyVerdict {
                    status,
                    reason: assessment.reason,
                }
            }
            Err(e) => {
                warn!(error = %e, "safety assessment malformed, degrading to WARN");
                SafetyVerdict::warn("Safety check returned malformed output. Proceed with caution.")
            }
        }
    }

    /// Compare the query's jurisdiction hint against the retrieved
    /// evidence's majority jurisdiction. A mismatch yields a warning reason;
    /// it never aborts the pipeline.
    pub fn jurisdiction_check(
        &self,
        hint: Option<&str>,
        retrieved_jurisdictions: &[String],
    ) -> Option<String> {
        let hint = hint?;
        if retrieved_jurisdictions.is_empty() {
            return None;
        }

        let mut counts: HashMap<String, usize> = HashMap::new();
        for j in retrieved_jurisdictions {
            *counts.entry(j.to_ascii_uppercase()).or_default() += 1;
        }
        let (majority, count) = counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))?;

        if count * 2 > retrieved_jurisdictions.len() && majority != hint.to_ascii_uppercase() {
            return Some(format!(
                "Jurisdiction mismatch: the query targets {hint}, but most retrieved \
                 evidence is for {majority}. Verify applicability before relying on it."
            ));
        }
        None
    }
}
