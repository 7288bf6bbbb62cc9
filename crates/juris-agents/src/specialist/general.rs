//! General counsel: the hybrid documents-plus-general-knowledge agent that
//! handles queries outside the other domains.

use std::sync::Arc;

use async_trait::async_trait;

use juris_core::models::{AgentKind, AgentOutcome, Query, RetrievalResult};
use juris_core::traits::{ICompletionProvider, ISpecialist};

use crate::prompts;

pub struct GeneralCounsel {
    completion: Arc<dyn ICompletionProvider>,
}

impl GeneralCounsel {
    pub fn new(completion: Arc<dyn ICompletionProvider>) -> Self {
        Self { completion }
    }
}

#[async_trait]
impl ISpecialist for GeneralCounsel {
    fn kind(&self) -> AgentKind {
        AgentKind::GeneralCounsel
    }

    async fn analyze(&self, query: &Query, evidence: &RetrievalResult) -> AgentOutcome {
        super::draft_claims(
            self.kind(),
            &self.completion,
            prompts::general_system_prompt(),
            query,
            evidence,
        )
        .await
    }
}
