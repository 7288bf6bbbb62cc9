//! Case-law research: precedents, court decisions, binding vs persuasive.

use std::sync::Arc;

use async_trait::async_trait;

use juris_core::models::{AgentKind, AgentOutcome, Query, RetrievalResult};
use juris_core::traits::{ICompletionProvider, ISpecialist};

use crate::prompts;

pub struct CaseLawResearcher {
    completion: Arc<dyn ICompletionProvider>,
}

impl CaseLawResearcher {
    pub fn new(completion: Arc<dyn ICompletionProvider>) -> Self {
        Self { completion }
    }
}

#[async_trait]
impl ISpecialist for CaseLawResearcher {
    fn kind(&self) -> AgentKind {
        AgentKind::CaseLaw
    }

    async fn analyze(&self, query: &Query, evidence: &RetrievalResult) -> AgentOutcome {
        super::draft_claims(
            self.kind(),
            &self.completion,
            prompts::case_law_system_prompt(),
            query,
            evidence,
        )
        .await
    }
}
