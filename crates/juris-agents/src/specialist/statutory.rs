//! Statutory interpretation: statutes, acts, sections, articles.

use std::sync::Arc;

use async_trait::async_trait;

use juris_core::models::{AgentKind, AgentOutcome, Query, RetrievalResult};
use juris_core::traits::{ICompletionProvider, ISpecialist};

use crate::prompts;

pub struct StatutoryInterpreter {
    completion: Arc<dyn ICompletionProvider>,
}

impl StatutoryInterpreter {
    pub fn new(completion: Arc<dyn ICompletionProvider>) -> Self {
        Self { completion }
    }
}

#[async_trait]
impl ISpecialist for StatutoryInterpreter {
    fn kind(&self) -> AgentKind {
        AgentKind::Statutory
    }

    async fn analyze(&self, query: &Query, evidence: &RetrievalResult) -> AgentOutcome {
        super::draft_claims(
            self.kind(),
            &self.completion,
            prompts::statutory_system_prompt(),
            query,
            evidence,
        )
        .await
    }
}
