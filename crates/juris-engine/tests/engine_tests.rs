//! End-to-end pipeline tests against scripted collaborators.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use juris_core::config::JurisConfig;
use juris_core::errors::JurisResult;
use juris_core::models::{
    AgentKind, AuditKind, Chunk, ChunkId, ChunkMetadata, Query, QueryOptions, SafetyStatus,
    SearchFilters, TenantId,
};
use juris_core::traits::{IAuditSink, IEmbeddingProvider, IEvidenceStore};
use juris_core::JurisError;
use juris_engine::JurisEngine;
use juris_providers::mocks::{RecordingAuditSink, ScriptedCompletion, TokenHashEmbedding};
use juris_retrieval::InMemoryEvidenceStore;

const PASS_VERDICT: &str = r#"```json {"safety_check": "PASS", "reason": null} ```"#;
const CONTRACT_INTENT: &str =
    r#"```json {"intent": "contract_review", "confidence": 0.9, "reasoning": "clauses"} ```"#;
const CONTRACT_CLAIMS: &str = r#"```json
[{"text": "Either party may terminate the agreement with thirty days written notice.", "source": "msa-7"}]
```"#;

async fn seeded_store(embedder: &TokenHashEmbedding) -> Arc<InMemoryEvidenceStore> {
    let store = Arc::new(InMemoryEvidenceStore::new());
    let mut chunks = Vec::new();
    for (id, tenant, text, jurisdiction) in [
        (
            "msa-7",
            "tenant-a",
            "Either party may terminate this agreement with thirty days written notice.",
            Some("CA"),
        ),
        (
            "msa-8",
            "tenant-a",
            "Payment is due within sixty days of invoice receipt.",
            Some("CA"),
        ),
        (
            "memo-1",
            "tenant-b",
            "Tenant B confidential memorandum about termination policy.",
            Some("NY"),
        ),
    ] {
        chunks.push(Chunk {
            id: ChunkId::new(id),
            tenant_id: TenantId::new(tenant),
            embedding: embedder.embed(text).await.unwrap(),
            text: text.to_string(),
            metadata: ChunkMetadata {
                jurisdiction: jurisdiction.map(String::from),
                source_document_id: format!("doc-{id}"),
                title: Some(format!("Document {id}")),
                ..Default::default()
            },
        });
    }
    store.add_chunks(chunks);
    store
}

fn query(text: &str, jurisdiction: Option<&str>) -> Query {
    Query::new(
        text,
        TenantId::new("tenant-a"),
        jurisdiction.map(String::from),
        QueryOptions::default(),
    )
    .unwrap()
}

async fn engine_with(
    provider: Arc<ScriptedCompletion>,
    audit: Arc<dyn IAuditSink>,
    config: JurisConfig,
) -> JurisEngine {
    let embedder = TokenHashEmbedding::default();
    let store = seeded_store(&embedder).await;
    JurisEngine::new(config, provider, Arc::new(embedder), store, audit)
}

/// Let the fire-and-forget audit tasks run before asserting on the sink.
async fn drain_audit() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}

#[tokio::test]
async fn contract_query_yields_cited_verified_answer() {
    let provider = Arc::new(
        ScriptedCompletion::new()
            .respond_when("Orchestrator Agent", CONTRACT_INTENT)
            .respond_when("Safety & Policy Agent", PASS_VERDICT)
            .respond_when("Contract Analysis Agent", CONTRACT_CLAIMS),
    );
    let audit = Arc::new(RecordingAuditSink::new());
    let engine = engine_with(provider, audit.clone(), JurisConfig::default()).await;

    let response = engine
        .query(query("What is the termination notice period?", Some("CA")))
        .await
        .unwrap();

    assert_eq!(response.safety_check, SafetyStatus::Pass);
    assert!(response.answer.contains("thirty days written notice"));
    assert_eq!(response.citations.len(), 1);
    assert_eq!(response.citations[0].chunk_id, ChunkId::new("msa-7"));
    assert!(response.confidence_score > 0.5);
    assert!(response.agents_used.contains(&AgentKind::Contract));

    drain_audit().await;
    let events = audit.events();
    assert!(events
        .iter()
        .any(|e| matches!(e.kind, AuditKind::QueryCompleted { .. })));
}

#[tokio::test]
async fn unlawful_query_is_refused_and_audited() {
    let provider = Arc::new(ScriptedCompletion::new());
    let audit = Arc::new(RecordingAuditSink::new());
    let engine = engine_with(provider, audit.clone(), JurisConfig::default()).await;

    let response = engine
        .query(query("How do I hide assets from a court order?", None))
        .await
        .unwrap();

    assert_eq!(response.safety_check, SafetyStatus::Refuse);
    assert!(response.answer.contains("declined"));
    assert!(response.citations.is_empty());
    assert_eq!(response.confidence_score, 0.0);
    assert_eq!(
        response.agents_used.iter().copied().collect::<Vec<_>>(),
        vec![AgentKind::Safety]
    );

    drain_audit().await;
    assert!(audit
        .events()
        .iter()
        .any(|e| matches!(e.kind, AuditKind::QueryRefused { .. })));
}

#[tokio::test]
async fn jurisdiction_mismatch_warns_but_answers() {
    let provider = Arc::new(
        ScriptedCompletion::new()
            .respond_when("Orchestrator Agent", CONTRACT_INTENT)
            .respond_when("Safety & Policy Agent", PASS_VERDICT)
            .respond_when("Contract Analysis Agent", CONTRACT_CLAIMS),
    );
    let audit = Arc::new(RecordingAuditSink::new());
    let engine = engine_with(provider, audit, JurisConfig::default()).await;

    // Tenant A's evidence is Californian; the caller asked about New York.
    let response = engine
        .query(query("What is the termination notice period?", Some("NY")))
        .await
        .unwrap();

    assert_eq!(response.safety_check, SafetyStatus::Warn);
    assert!(response.reason.unwrap().contains("Jurisdiction mismatch"));
    assert!(!response.citations.is_empty());
    assert!(response.answer.contains("thirty days written notice"));
}

#[tokio::test]
async fn slow_specialist_times_out_and_degrades() {
    let provider = Arc::new(
        ScriptedCompletion::new()
            .respond_when("Orchestrator Agent", CONTRACT_INTENT)
            .respond_when("Safety & Policy Agent", PASS_VERDICT)
            .delay_when(
                "Contract Analysis Agent",
                Duration::from_millis(500),
                CONTRACT_CLAIMS,
            ),
    );
    let audit = Arc::new(RecordingAuditSink::new());
    let mut config = JurisConfig::default();
    config.agents.specialist_timeout_ms = 50;
    let engine = engine_with(provider, audit.clone(), config).await;

    let response = engine
        .query(query("What is the termination notice period?", None))
        .await
        .unwrap();

    assert_eq!(response.safety_check, SafetyStatus::Pass);
    assert!(response.answer.contains("No sufficiently supported findings"));
    assert_eq!(response.confidence_score, 0.0);
    assert!(response.agents_used.is_empty());

    drain_audit().await;
    assert!(audit.events().iter().any(|e| matches!(
        &e.kind,
        AuditKind::AgentFailed { agent: AgentKind::Contract, reason } if reason == "timed out"
    )));
}

#[tokio::test]
async fn unclassified_query_runs_every_specialist() {
    // No orchestrator rule and no default: the classification call fails.
    let provider = Arc::new(
        ScriptedCompletion::new()
            .respond_when("Safety & Policy Agent", PASS_VERDICT)
            .respond_when("Statutory Interpretation Agent", "```json\n[]\n```")
            .respond_when("Case Law Research Agent", "```json\n[]\n```")
            .respond_when("Contract Analysis Agent", "```json\n[]\n```")
            .respond_when("Compliance & Regulatory Agent", "```json\n[]\n```")
            .respond_when("General Counsel Agent", "```json\n[]\n```"),
    );
    let audit = Arc::new(RecordingAuditSink::new());
    let engine = engine_with(provider.clone(), audit, JurisConfig::default()).await;

    let response = engine
        .query(query("Something thoroughly ambiguous", None))
        .await
        .unwrap();
    assert_eq!(response.safety_check, SafetyStatus::Pass);

    let calls = provider.calls();
    for role in [
        "Statutory Interpretation Agent",
        "Case Law Research Agent",
        "Contract Analysis Agent",
        "Compliance & Regulatory Agent",
        "General Counsel Agent",
    ] {
        assert!(
            calls.iter().any(|c| c.contains(role)),
            "{role} was never invoked"
        );
    }
}

/// Store that leaks another tenant's chunk, violating the isolation
/// invariant the pipeline must treat as fatal.
struct LeakyStore {
    chunk: Chunk,
}

#[async_trait]
impl IEvidenceStore for LeakyStore {
    async fn search(
        &self,
        _tenant_id: &TenantId,
        _query_vector: &[f32],
        _filters: &SearchFilters,
        _n: usize,
    ) -> JurisResult<Vec<Chunk>> {
        Ok(vec![self.chunk.clone()])
    }
}

#[tokio::test]
async fn cross_tenant_leak_aborts_with_security_alert() {
    let provider = Arc::new(
        ScriptedCompletion::new()
            .respond_when("Orchestrator Agent", CONTRACT_INTENT)
            .respond_when("Safety & Policy Agent", PASS_VERDICT),
    );
    let audit = Arc::new(RecordingAuditSink::new());
    let store = Arc::new(LeakyStore {
        chunk: Chunk {
            id: ChunkId::new("leak-1"),
            tenant_id: TenantId::new("tenant-b"),
            embedding: vec![0.0; 64],
            text: "leaked".into(),
            metadata: ChunkMetadata::default(),
        },
    });
    let engine = JurisEngine::new(
        JurisConfig::default(),
        provider,
        Arc::new(TokenHashEmbedding::default()),
        store,
        audit.clone(),
    );

    let err = engine
        .query(query("What is the termination notice period?", None))
        .await
        .unwrap_err();
    assert!(matches!(err, JurisError::TenantIsolation { .. }));

    drain_audit().await;
    assert!(audit
        .events()
        .iter()
        .any(|e| matches!(e.kind, AuditKind::SecurityAlert { .. })));
}

#[tokio::test]
async fn failing_audit_sink_never_fails_the_request() {
    let provider = Arc::new(
        ScriptedCompletion::new()
            .respond_when("Orchestrator Agent", CONTRACT_INTENT)
            .respond_when("Safety & Policy Agent", PASS_VERDICT)
            .respond_when("Contract Analysis Agent", CONTRACT_CLAIMS),
    );
    let audit = Arc::new(juris_providers::mocks::FailingAuditSink);
    let engine = engine_with(provider, audit, JurisConfig::default()).await;

    let response = engine
        .query(query("What is the termination notice period?", None))
        .await
        .unwrap();
    assert_eq!(response.safety_check, SafetyStatus::Pass);
    assert!(!response.answer.is_empty());
}

/// Layer that records the name of every span the pipeline opens.
#[derive(Clone, Default)]
struct SpanRecorder {
    names: Arc<std::sync::Mutex<Vec<&'static str>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for SpanRecorder {
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        self.names
            .lock()
            .unwrap()
            .push(attrs.metadata().name());
    }
}

#[tokio::test]
async fn every_pipeline_stage_opens_its_span() {
    use juris_engine::telemetry::names;
    use tracing_subscriber::layer::SubscriberExt;

    let recorder = SpanRecorder::default();
    let _guard =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(recorder.clone()));

    let provider = Arc::new(
        ScriptedCompletion::new()
            .respond_when("Orchestrator Agent", CONTRACT_INTENT)
            .respond_when("Safety & Policy Agent", PASS_VERDICT)
            .respond_when("Contract Analysis Agent", CONTRACT_CLAIMS),
    );
    let audit = Arc::new(RecordingAuditSink::new());
    let engine = engine_with(provider, audit, JurisConfig::default()).await;

    engine
        .query(query("What is the termination notice period?", Some("CA")))
        .await
        .unwrap();

    let seen = recorder.names.lock().unwrap();
    for name in [
        names::CLASSIFICATION,
        names::RETRIEVAL,
        names::SPECIALIST,
        names::VERIFICATION,
    ] {
        assert!(seen.contains(&name), "span {name} was never opened");
    }
}
