//! Intent classification via the completion provider.
//!
//! Classification is advisory: any failure (timeout, provider error,
//! malformed output, low confidence) yields `None` and the planner falls
//! back to the full specialist pool instead of guessing.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::time::timeout;
use tracing::{debug, warn};

use juris_agents::parse::extract_json;
use juris_agents::prompts::ORCHESTRATOR_PROMPT;
use juris_core::config::AgentConfig;
use juris_core::models::Query;
use juris_core::traits::{CompletionRequest, ICompletionProvider};
use juris_core::Intent;

#[derive(Deserialize)]
struct RawClassification {
    intent: String,
    #[serde(default)]
    confidence: f64,
    #[serde(default)]
    reasoning: Option<String>,
}

/// Classifies queries into the intent taxonomy.
pub struct IntentClassifier {
    completion: Arc<dyn ICompletionProvider>,
    config: AgentConfig,
}

impl IntentClassifier {
    pub fn new(completion: Arc<dyn ICompletionProvider>, config: AgentConfig) -> Self {
        Self { completion, config }
    }

    /// Classify one query. `None` means "unclassified": the caller must
    /// widen the plan, not fail the request.
    pub async fn classify(&self, query: &Query) -> Option<Intent> {
        let request = CompletionRequest::deterministic(ORCHESTRATOR_PROMPT, &query.text);
        let deadline = Duration::from_millis(self.config.classifier_timeout_ms);

        let content = match timeout(deadline, self.completion.complete(&request)).await {
            Ok(Ok(content)) => content,
            Ok(Err(e)) => {
                warn!(query = %query.id, error = %e, "classification call failed");
                return None;
            }
            Err(_) => {
                warn!(query = %query.id, "classification timed out");
                return None;
            }
        };

        let raw: RawClassification = match serde_json::from_str(extract_json(&content)) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(query = %query.id, error = %e, "classification output malformed");
                return None;
            }
        };

        if raw.confidence < self.config.classifier_min_confidence {
            debug!(
                query = %query.id,
                label = %raw.intent,
                confidence = raw.confidence,
                "classification below confidence floor"
            );
            return None;
        }

        let intent = Intent::from_label(&raw.intent);
        debug!(
            query = %query.id,
            %intent,
            confidence = raw.confidence,
            reasoning = raw.reasoning.as_deref().unwrap_or(""),
            "query classified"
        );
        Some(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juris_core::models::{QueryOptions, TenantId};
    use juris_providers::mocks::ScriptedCompletion;

    fn query(text: &str) -> Query {
        Query::new(text, TenantId::new("t1"), None, QueryOptions::default()).unwrap()
    }

    fn classifier(provider: ScriptedCompletion) -> IntentClassifier {
        IntentClassifier::new(Arc::new(provider), AgentConfig::default())
    }

    #[tokio::test]
    async fn confident_classification_is_accepted() {
        let c = classifier(ScriptedCompletion::new().otherwise(
            r#"```json {"intent": "contract_review", "confidence": 0.92, "reasoning": "clauses"} ```"#,
        ));
        let intent = c.classify(&query("Review this termination clause")).await;
        assert_eq!(intent, Some(Intent::ContractReview));
    }

    #[tokio::test]
    async fn low_confidence_yields_none() {
        let c = classifier(
            ScriptedCompletion::new()
                .otherwise(r#"{"intent": "contract_review", "confidence": 0.2}"#),
        );
        assert_eq!(c.classify(&query("hmm")).await, None);
    }

    #[tokio::test]
    async fn unknown_label_with_confidence_maps_to_general() {
        let c = classifier(
            ScriptedCompletion::new().otherwise(r#"{"intent": "tax_wizardry", "confidence": 0.9}"#),
        );
        assert_eq!(c.classify(&query("anything")).await, Some(Intent::General));
    }

    #[tokio::test]
    async fn provider_failure_yields_none() {
        let c = classifier(ScriptedCompletion::new()); // every call fails
        assert_eq!(c.classify(&query("anything")).await, None);
    }

    #[tokio::test]
    async fn prose_output_yields_none() {
        let c = classifier(ScriptedCompletion::new().otherwise("this looks like a contract"));
        assert_eq!(c.classify(&query("anything")).await, None);
    }
}
