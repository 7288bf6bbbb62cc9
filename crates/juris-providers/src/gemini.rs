//! Gemini REST providers for completion and embedding.
//!
//! Both clients flatten the system/user split into a single prompt (the
//! `generateContent` API takes one content stream) and retry transient HTTP
//! failures with bounded exponential backoff.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use juris_core::config::AgentConfig;
use juris_core::errors::{JurisError, JurisResult, UpstreamError};
use juris_core::traits::{CompletionRequest, ICompletionProvider, IEmbeddingProvider};

use crate::retry::{with_retries, RetryPolicy};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings shared by both Gemini clients.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    /// Completion model, e.g. "gemini-2.5-flash".
    pub model: String,
    /// Embedding model, e.g. "text-embedding-004".
    pub embedding_model: String,
    pub embedding_dimensions: usize,
    pub retry: RetryPolicy,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: "gemini-2.5-flash".to_string(),
            embedding_model: "text-embedding-004".to_string(),
            embedding_dimensions: 768,
            retry: RetryPolicy::default(),
        }
    }

    /// Derive the retry schedule from the engine's agent configuration, so
    /// `max_retries`/`retry_base_delay_ms` govern the providers built from it.
    pub fn with_retry_from(mut self, agents: &AgentConfig) -> Self {
        self.retry = RetryPolicy::new(agents.max_retries, agents.retry_base_delay_ms);
        self
    }
}

fn unavailable(service: &str, e: impl std::fmt::Display) -> JurisError {
    JurisError::Upstream(UpstreamError::Unavailable {
        service: service.to_string(),
        reason: e.to_string(),
    })
}

fn bad_response(service: &str, reason: impl Into<String>) -> JurisError {
    JurisError::Upstream(UpstreamError::BadResponse {
        service: service.to_string(),
        reason: reason.into(),
    })
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: String,
}

/// `generateContent`-backed completion provider.
pub struct GeminiCompletion {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiCompletion {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn call_once(&self, request: &CompletionRequest) -> JurisResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        );
        let prompt = format!("System: {}\n\nUser: {}", request.system, request.user);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": request.temperature,
                "maxOutputTokens": request.max_tokens,
            }
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| unavailable("completion", e))?;

        if !response.status().is_success() {
            return Err(unavailable(
                "completion",
                format!("http status {}", response.status()),
            ));
        }

        let decoded: GenerateResponse = response
            .json()
            .await
            .map_err(|e| bad_response("completion", e.to_string()))?;

        let text: String = decoded
            .candidates
            .first()
            .map(|c| c.content.parts.iter().map(|p| p.text.as_str()).collect())
            .ok_or_else(|| bad_response("completion", "no candidates in response"))?;

        debug!(chars = text.len(), "completion received");
        Ok(text)
    }
}

#[async_trait]
impl ICompletionProvider for GeminiCompletion {
    async fn complete(&self, request: &CompletionRequest) -> JurisResult<String> {
        with_retries(self.config.retry, "completion", || self.call_once(request)).await
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

// ---------------------------------------------------------------------------
// Embedding
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

/// `embedContent`-backed embedding provider.
pub struct GeminiEmbedding {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiEmbedding {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn call_once(&self, text: &str) -> JurisResult<Vec<f32>> {
        let url = format!(
            "{}/models/{}:embedContent?key={}",
            self.config.base_url, self.config.embedding_model, self.config.api_key
        );
        let body = json!({ "content": { "parts": [{ "text": text }] } });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| unavailable("embedding", e))?;

        if !response.status().is_success() {
            return Err(unavailable(
                "embedding",
                format!("http status {}", response.status()),
            ));
        }

        let decoded: EmbedResponse = response
            .json()
            .await
            .map_err(|e| bad_response("embedding", e.to_string()))?;

        if decoded.embedding.values.is_empty() {
            return Err(bad_response("embedding", "empty embedding vector"));
        }
        Ok(decoded.embedding.values)
    }
}

#[async_trait]
impl IEmbeddingProvider for GeminiEmbedding {
    async fn embed(&self, text: &str) -> JurisResult<Vec<f32>> {
        with_retries(self.config.retry, "embedding", || self.call_once(text)).await
    }

    fn dimensions(&self) -> usize {
        self.config.embedding_dimensions
    }

    fn name(&self) -> &str {
        "gemini-embedding"
    }
}
