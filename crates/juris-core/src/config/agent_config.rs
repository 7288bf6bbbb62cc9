use serde::{Deserialize, Serialize};

/// Configuration for classifier and specialist invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Per-specialist deadline. A timeout cancels only that specialist.
    /// Default: 30_000.
    pub specialist_timeout_ms: u64,
    /// Deadline for the intent classification call. Default: 10_000.
    pub classifier_timeout_ms: u64,
    /// Classifier confidence below which the default plan is used.
    /// Default: 0.4.
    pub classifier_min_confidence: f64,
    /// Retry attempts for transient upstream failures. Default: 3.
    pub max_retries: u32,
    /// Base delay for exponential backoff between retries. Default: 200.
    pub retry_base_delay_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            specialist_timeout_ms: 30_000,
            classifier_timeout_ms: 10_000,
            classifier_min_confidence: 0.4,
            max_retries: 3,
            retry_base_delay_ms: 200,
        }
    }
}
