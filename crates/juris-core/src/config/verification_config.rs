use serde::{Deserialize, Serialize};

/// Configuration for the verification and citation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Minimum entailment support score for a claim to be retained.
    /// Claims scoring below this are dropped, not presented as fact.
    /// Default: 0.35.
    pub support_threshold: f64,
    /// Fixed support score assigned to explicitly general-knowledge claims.
    /// They are retained but never cited, and pull the aggregate confidence
    /// toward this value. Default: 0.5.
    pub general_knowledge_weight: f64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            support_threshold: 0.35,
            general_knowledge_weight: 0.5,
        }
    }
}
