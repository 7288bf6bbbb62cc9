//! The query pipeline.
//!
//! Stages per query:
//!   1. classify intent, build the plan
//!   2. safety gate and evidence retrieval, concurrently
//!   3. planned specialists in parallel, each under its own deadline
//!   4. verification barrier: score, prune, aggregate confidence
//!   5. assemble the answer, emit audit records
//!
//! Failures are asymmetric by design: a safety refusal or a tenant
//! isolation breach aborts the run; everything else degrades and the
//! pipeline answers with whatever survived.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, warn, Instrument};

use juris_agents::{SafetyGate, SpecialistRegistry};
use juris_core::config::JurisConfig;
use juris_core::errors::{JurisError, JurisResult};
use juris_core::models::{
    AgentKind, AgentOutcome, AuditEvent, AuditKind, Claim, ExecutionPlan, FinalResponse, Query,
    RetrievalResult,
};
use juris_core::traits::{
    IAuditSink, ICompletionProvider, IEmbeddingProvider, IEvidenceStore,
};
use juris_retrieval::RetrievalEngine;
use juris_verification::VerificationEngine;

use crate::assembler;
use crate::classifier::IntentClassifier;
use crate::planner;

/// The multi-agent legal query engine.
///
/// One instance serves many tenants concurrently; all per-query state lives
/// on the stack of [`JurisEngine::query`].
pub struct JurisEngine {
    config: JurisConfig,
    classifier: IntentClassifier,
    retrieval: Arc<RetrievalEngine>,
    registry: SpecialistRegistry,
    safety: SafetyGate,
    verification: VerificationEngine,
    audit: Arc<dyn IAuditSink>,
}

impl JurisEngine {
    /// Wire an engine with the stock specialist pool, all stages sharing
    /// one completion provider.
    pub fn new(
        config: JurisConfig,
        completion: Arc<dyn ICompletionProvider>,
        embeddings: Arc<dyn IEmbeddingProvider>,
        store: Arc<dyn IEvidenceStore>,
        audit: Arc<dyn IAuditSink>,
    ) -> Self {
        let classifier = IntentClassifier::new(completion.clone(), config.agents.clone());
        let retrieval = Arc::new(RetrievalEngine::new(
            store,
            embeddings,
            config.retrieval.clone(),
        ));
        let registry = SpecialistRegistry::with_default_specialists(completion.clone());
        let safety = SafetyGate::new(completion);
        let verification = VerificationEngine::new(config.verification.clone());
        Self {
            config,
            classifier,
            retrieval,
            registry,
            safety,
            verification,
            audit,
        }
    }

    /// Replace the specialist pool (e.g. to register a custom domain).
    pub fn with_registry(mut self, registry: SpecialistRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Process one query end to end.
    ///
    /// `Err` is reserved for broken invariants (tenant isolation) and
    /// invalid input; ordinary upstream trouble produces a degraded `Ok`
    /// response instead.
    pub async fn query(&self, query: Query) -> JurisResult<FinalResponse> {
        let intent = self
            .classifier
            .classify(&query)
            .instrument(crate::classification_span!(query.id))
            .await;
        let plan = planner::build_plan(intent);
        info!(
            query = %query.id,
            tenant = %query.tenant_id,
            intent = %plan.intent,
            specialists = plan.specialists().count(),
            "plan built"
        );

        // Safety and retrieval run concurrently; a refusal cancels the
        // retrieval work outright.
        let retrieval_task = {
            let engine = self.retrieval.clone();
            let q = query.clone();
            let span = crate::retrieval_span!(query.id, query.tenant_id);
            tokio::spawn(async move { engine.retrieve(&q).await }.instrument(span))
        };

        let mut verdict = self.safety.check(&query).await;
        if verdict.is_refuse() {
            retrieval_task.abort();
            let reason = verdict
                .reason
                .clone()
                .unwrap_or_else(|| "refused by safety policy".to_string());
            info!(query = %query.id, %reason, "query refused");
            self.audit_event(&query, AuditKind::QueryRefused { reason });
            return Ok(assembler::refusal(&verdict));
        }

        let evidence = match retrieval_task.await {
            Ok(Ok(evidence)) => evidence,
            Ok(Err(fatal @ JurisError::TenantIsolation { .. })) => {
                self.audit_event(
                    &query,
                    AuditKind::SecurityAlert {
                        detail: fatal.to_string(),
                    },
                );
                return Err(fatal);
            }
            Ok(Err(e)) => {
                warn!(query = %query.id, error = %e, "retrieval degraded, continuing without evidence");
                RetrievalResult::empty()
            }
            Err(e) => {
                warn!(query = %query.id, error = %e, "retrieval task did not complete");
                RetrievalResult::empty()
            }
        };

        // The jurisdiction comparison needs the retrieved evidence, so it
        // runs here rather than inside the pre-retrieval check.
        if let Some(reason) = self
            .safety
            .jurisdiction_check(query.jurisdiction.as_deref(), &evidence.jurisdictions())
        {
            verdict = verdict.with_warning(reason);
        }

        let outcomes = self.run_specialists(&plan, &query, &evidence).await;

        let mut claims: Vec<Claim> = Vec::new();
        for (kind, outcome) in &outcomes {
            match outcome {
                AgentOutcome::Success { claims: drafted } => {
                    claims.extend(drafted.iter().cloned());
                }
                AgentOutcome::Failure { reason } => {
                    self.audit_event(
                        &query,
                        AuditKind::AgentFailed {
                            agent: *kind,
                            reason: reason.clone(),
                        },
                    );
                }
                AgentOutcome::TimedOut => {
                    self.audit_event(
                        &query,
                        AuditKind::AgentFailed {
                            agent: *kind,
                            reason: "timed out".to_string(),
                        },
                    );
                }
            }
        }

        // Verification barrier: nothing reaches the answer unchecked.
        let (verified, confidence) = {
            let _span = crate::verification_span!(query.id, claims.len()).entered();
            self.verification.verify(&claims, &evidence)
        };
        let response = assembler::assemble(&query, &plan, &verified, confidence, &verdict);

        self.audit_event(
            &query,
            AuditKind::QueryCompleted {
                intent: plan.intent,
                agents_used: response.agents_used.clone(),
                confidence_score: response.confidence_score,
                safety_check: response.safety_check,
            },
        );

        info!(
            query = %query.id,
            confidence = response.confidence_score,
            safety = ?response.safety_check,
            citations = response.citations.len(),
            "query complete"
        );
        Ok(response)
    }

    /// Run the plan's specialists in parallel, each under the configured
    /// deadline. One slow or failing specialist never blocks the others;
    /// its outcome is recorded and the rest proceed.
    async fn run_specialists(
        &self,
        plan: &ExecutionPlan,
        query: &Query,
        evidence: &RetrievalResult,
    ) -> Vec<(AgentKind, AgentOutcome)> {
        let deadline = Duration::from_millis(self.config.agents.specialist_timeout_ms);
        let kinds: Vec<AgentKind> = plan.specialists().collect();

        let mut by_kind: HashMap<AgentKind, AgentOutcome> = HashMap::new();
        let mut set: JoinSet<(AgentKind, AgentOutcome)> = JoinSet::new();
        for kind in kinds.iter().copied() {
            match self.registry.get(kind) {
                Some(specialist) => {
                    let q = query.clone();
                    let ev = evidence.clone();
                    let span = crate::specialist_span!(query.id, kind);
                    set.spawn(
                        async move {
                            match timeout(deadline, specialist.analyze(&q, &ev)).await {
                                Ok(outcome) => (kind, outcome),
                                Err(_) => (kind, AgentOutcome::TimedOut),
                            }
                        }
                        .instrument(span),
                    );
                }
                None => {
                    by_kind.insert(
                        kind,
                        AgentOutcome::Failure {
                            reason: format!("no specialist registered for {kind}"),
                        },
                    );
                }
            }
        }

        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((kind, outcome)) => {
                    debug!(agent = %kind, status = outcome.status(), "specialist finished");
                    by_kind.insert(kind, outcome);
                }
                Err(e) => warn!(error = %e, "specialist task panicked"),
            }
        }

        kinds
            .into_iter()
            .map(|kind| {
                let outcome = by_kind.remove(&kind).unwrap_or(AgentOutcome::Failure {
                    reason: "specialist did not complete".to_string(),
                });
                (kind, outcome)
            })
            .collect()
    }

    /// Fire-and-forget audit. A sink failure is logged, never surfaced.
    fn audit_event(&self, query: &Query, kind: AuditKind) {
        let event = AuditEvent::new(query.tenant_id.clone(), query.id, kind);
        let sink = self.audit.clone();
        tokio::spawn(async move {
            if let Err(e) = sink.record(event).await {
                warn!(error = %e, "audit sink rejected event");
            }
        });
    }
}
