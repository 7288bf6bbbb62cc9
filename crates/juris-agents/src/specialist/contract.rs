//! Contract analysis: clause extraction, risk identification, obligations.

use std::sync::Arc;

use async_trait::async_trait;

use juris_core::models::{AgentKind, AgentOutcome, Query, RetrievalResult};
use juris_core::traits::{ICompletionProvider, ISpecialist};

use crate::prompts;

pub struct ContractAnalyzer {
    completion: Arc<dyn ICompletionProvider>,
}

impl ContractAnalyzer {
    pub fn new(completion: Arc<dyn ICompletionProvider>) -> Self {
        Self { completion }
    }
}

#[async_trait]
impl ISpecialist for ContractAnalyzer {
    fn kind(&self) -> AgentKind {
        AgentKind::Contract
    }

    async fn analyze(&self, query: &Query, evidence: &RetrievalResult) -> AgentOutcome {
        super::draft_claims(
            self.kind(),
            &self.completion,
            prompts::contract_system_prompt(),
            query,
            evidence,
        )
        .await
    }
}
