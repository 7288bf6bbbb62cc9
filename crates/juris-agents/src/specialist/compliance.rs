//! Compliance checks: scenario vs regulatory requirements.

use std::sync::Arc;

use async_trait::async_trait;

use juris_core::models::{AgentKind, AgentOutcome, Query, RetrievalResult};
use juris_core::traits::{ICompletionProvider, ISpecialist};

use crate::prompts;

pub struct ComplianceChecker {
    completion: Arc<dyn ICompletionProvider>,
}

impl ComplianceChecker {
    pub fn new(completion: Arc<dyn ICompletionProvider>) -> Self {
        Self { completion }
    }
}

#[async_trait]
impl ISpecialist for ComplianceChecker {
    fn kind(&self) -> AgentKind {
        AgentKind::Compliance
    }

    async fn analyze(&self, query: &Query, evidence: &RetrievalResult) -> AgentOutcome {
        super::draft_claims(
            self.kind(),
            &self.completion,
            prompts::compliance_system_prompt(),
            query,
            evidence,
        )
        .await
    }
}
