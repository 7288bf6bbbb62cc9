//! VerificationEngine: cross-checks draft claims against their evidence.

use tracing::{debug, info};

use juris_core::config::VerificationConfig;
use juris_core::models::{Claim, ClaimSupport, RetrievalResult, VerifiedClaim};

use crate::citations::citation_for;
use crate::entailment::{claim_weight, support_score};

/// The verification and citation unit.
///
/// Pure and synchronous: scoring is lexical, so this stage cannot be taken
/// down by the completion service it is auditing.
pub struct VerificationEngine {
    config: VerificationConfig,
}

impl VerificationEngine {
    pub fn new(config: VerificationConfig) -> Self {
        Self { config }
    }

    /// Verify all draft claims against the evidence and compute the
    /// aggregate confidence score.
    ///
    /// Every retained claim passed the same threshold used to drop the
    /// rest. Confidence is the claim-length-weighted mean of retained
    /// support scores, clamped to [0, 1], and exactly 0 when nothing is
    /// retained. Refused queries never reach this stage; the orchestrator
    /// short-circuits them before any claim is drafted.
    pub fn verify(
        &self,
        claims: &[Claim],
        evidence: &RetrievalResult,
    ) -> (Vec<VerifiedClaim>, f64) {
        let verified: Vec<VerifiedClaim> = claims
            .iter()
            .map(|claim| self.verify_one(claim, evidence))
            .collect();

        let confidence = self.aggregate_confidence(&verified);

        info!(
            drafted = claims.len(),
            retained = verified.iter().filter(|v| v.retained).count(),
            confidence,
            "verification complete"
        );

        (verified, confidence)
    }

    fn verify_one(&self, claim: &Claim, evidence: &RetrievalResult) -> VerifiedClaim {
        match &claim.support {
            Some(ClaimSupport::Evidence(chunk_id)) => match evidence.get(chunk_id) {
                Some(chunk) => {
                    let score = support_score(&claim.text, &chunk.text);
                    let retained = score >= self.config.support_threshold;
                    if !retained {
                        debug!(chunk = %chunk_id, score, "claim dropped as unsupported");
                    }
                    VerifiedClaim {
                        claim: claim.clone(),
                        support_score: score,
                        retained,
                        citation: retained.then(|| citation_for(chunk)),
                    }
                }
                // Cited chunk is not in the evidence set: unsupported.
                None => VerifiedClaim {
                    claim: claim.clone(),
                    support_score: 0.0,
                    retained: false,
                    citation: None,
                },
            },
            // Explicit general knowledge: retained, never cited, fixed
            // lower support weight.
            Some(ClaimSupport::GeneralKnowledge) => VerifiedClaim {
                claim: claim.clone(),
                support_score: self.config.general_knowledge_weight,
                retained: true,
                citation: None,
            },
            // Untagged claims are unsupported, not an error.
            None => VerifiedClaim {
                claim: claim.clone(),
                support_score: 0.0,
                retained: false,
                citation: None,
            },
        }
    }

    fn aggregate_confidence(&self, verified: &[VerifiedClaim]) -> f64 {
        let retained: Vec<&VerifiedClaim> = verified.iter().filter(|v| v.retained).collect();
        if retained.is_empty() {
            return 0.0;
        }
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for v in &retained {
            let weight = claim_weight(&v.claim.text);
            weighted_sum += v.support_score * weight;
            total_weight += weight;
        }
        (weighted_sum / total_weight).clamp(0.0, 1.0)
    }
}
