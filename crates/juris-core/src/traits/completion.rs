use async_trait::async_trait;

use crate::errors::JurisResult;

/// One completion call: a system prompt, a user prompt, and sampling knobs.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: 0.1,
            max_tokens: 1500,
        }
    }

    /// Deterministic variant for classification and policy checks.
    pub fn deterministic(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            temperature: 0.0,
            max_tokens: 500,
            ..Self::new(system, user)
        }
    }
}

/// Text-generation provider. Non-deterministic, potentially slow or
/// unavailable; callers must treat every invocation as fallible.
#[async_trait]
pub trait ICompletionProvider: Send + Sync {
    /// Generate a completion for the request.
    async fn complete(&self, request: &CompletionRequest) -> JurisResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
