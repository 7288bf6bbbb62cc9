//! Deterministic test doubles for the collaborator traits.
//!
//! The orchestration logic (routing, barriers, cancellation, aggregation) is
//! unit-tested against these instead of a real model: tests inject scripted
//! outcomes and assert on the pipeline's behavior.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use juris_core::errors::{JurisError, JurisResult, UpstreamError};
use juris_core::models::AuditEvent;
use juris_core::traits::{
    CompletionRequest, IAuditSink, ICompletionProvider, IEmbeddingProvider,
};

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

enum Behavior {
    Respond(String),
    Fail(String),
    /// Sleep, then respond. For exercising per-specialist timeouts.
    Delay(Duration, String),
}

struct Rule {
    needle: String,
    behavior: Behavior,
}

/// Completion provider driven by substring-matched rules.
///
/// The first rule whose needle occurs in the concatenated system+user prompt
/// wins; with no match the default response (if any) is returned.
#[derive(Default)]
pub struct ScriptedCompletion {
    rules: Vec<Rule>,
    default: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_when(mut self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.rules.push(Rule {
            needle: needle.into(),
            behavior: Behavior::Respond(response.into()),
        });
        self
    }

    pub fn fail_when(mut self, needle: impl Into<String>, reason: impl Into<String>) -> Self {
        self.rules.push(Rule {
            needle: needle.into(),
            behavior: Behavior::Fail(reason.into()),
        });
        self
    }

    pub fn delay_when(
        mut self,
        needle: impl Into<String>,
        delay: Duration,
        response: impl Into<String>,
    ) -> Self {
        self.rules.push(Rule {
            needle: needle.into(),
            behavior: Behavior::Delay(delay, response.into()),
        });
        self
    }

    pub fn otherwise(mut self, response: impl Into<String>) -> Self {
        self.default = Some(response.into());
        self
    }

    /// Prompts seen so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl ICompletionProvider for ScriptedCompletion {
    async fn complete(&self, request: &CompletionRequest) -> JurisResult<String> {
        let prompt = format!("{}\n{}", request.system, request.user);
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push(prompt.clone());

        for rule in &self.rules {
            if prompt.contains(&rule.needle) {
                return match &rule.behavior {
                    Behavior::Respond(text) => Ok(text.clone()),
                    Behavior::Fail(reason) => {
                        Err(JurisError::Upstream(UpstreamError::Unavailable {
                            service: "scripted-completion".into(),
                            reason: reason.clone(),
                        }))
                    }
                    Behavior::Delay(delay, text) => {
                        tokio::time::sleep(*delay).await;
                        Ok(text.clone())
                    }
                };
            }
        }

        self.default.clone().ok_or_else(|| {
            JurisError::Upstream(UpstreamError::Unavailable {
                service: "scripted-completion".into(),
                reason: "no scripted response matches the prompt".into(),
            })
        })
    }

    fn name(&self) -> &str {
        "scripted-completion"
    }
}

// ---------------------------------------------------------------------------
// Embedding
// ---------------------------------------------------------------------------

/// Deterministic bag-of-words hash embedding.
///
/// Each lowercase token bumps one hashed dimension, then the vector is
/// L2-normalized, so identical texts embed identically and word-overlapping
/// texts land near each other. No model, no network.
pub struct TokenHashEmbedding {
    dimensions: usize,
}

impl TokenHashEmbedding {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }
}

impl Default for TokenHashEmbedding {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl IEmbeddingProvider for TokenHashEmbedding {
    async fn embed(&self, text: &str) -> JurisResult<Vec<f32>> {
        let mut vector = vec![0.0f32; self.dimensions];
        for token in text.to_lowercase().split_whitespace() {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let idx = (hasher.finish() as usize) % self.dimensions;
            vector[idx] += 1.0;
        }
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "token-hash-embedding"
    }
}

/// Embedding provider that always fails. For degradation tests.
pub struct FailingEmbedding;

#[async_trait]
impl IEmbeddingProvider for FailingEmbedding {
    async fn embed(&self, _text: &str) -> JurisResult<Vec<f32>> {
        Err(JurisError::Upstream(UpstreamError::Unavailable {
            service: "failing-embedding".into(),
            reason: "embedding service down".into(),
        }))
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "failing-embedding"
    }
}

// ---------------------------------------------------------------------------
// Audit
// ---------------------------------------------------------------------------

/// Audit sink that stores every event in memory.
#[derive(Default)]
pub struct RecordingAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl RecordingAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl IAuditSink for RecordingAuditSink {
    async fn record(&self, event: AuditEvent) -> JurisResult<()> {
        self.events.lock().expect("mock lock poisoned").push(event);
        Ok(())
    }
}

/// Audit sink that always errors. The pipeline must shrug it off.
pub struct FailingAuditSink;

#[async_trait]
impl IAuditSink for FailingAuditSink {
    async fn record(&self, _event: AuditEvent) -> JurisResult<()> {
        Err(JurisError::Upstream(UpstreamError::Unavailable {
            service: "failing-audit".into(),
            reason: "audit sink down".into(),
        }))
    }
}
