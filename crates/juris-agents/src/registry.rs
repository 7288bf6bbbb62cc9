//! Specialist registry, the pool's extension point.

use std::collections::HashMap;
use std::sync::Arc;

use juris_core::models::AgentKind;
use juris_core::traits::{ICompletionProvider, ISpecialist};

use crate::specialist::{
    CaseLawResearcher, ComplianceChecker, ContractAnalyzer, GeneralCounsel, StatutoryInterpreter,
};

/// Registry of available specialists, keyed by their `AgentKind`.
///
/// Adding a legal domain means registering a new `ISpecialist` here; the
/// orchestrator only ever resolves the plan against the registry.
#[derive(Default)]
pub struct SpecialistRegistry {
    specialists: HashMap<AgentKind, Arc<dyn ISpecialist>>,
}

impl SpecialistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry wired with all five stock specialists sharing one provider.
    pub fn with_default_specialists(completion: Arc<dyn ICompletionProvider>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(StatutoryInterpreter::new(completion.clone())));
        registry.register(Arc::new(CaseLawResearcher::new(completion.clone())));
        registry.register(Arc::new(ContractAnalyzer::new(completion.clone())));
        registry.register(Arc::new(ComplianceChecker::new(completion.clone())));
        registry.register(Arc::new(GeneralCounsel::new(completion)));
        registry
    }

    pub fn register(&mut self, specialist: Arc<dyn ISpecialist>) {
        self.specialists.insert(specialist.kind(), specialist);
    }

    pub fn get(&self, kind: AgentKind) -> Option<Arc<dyn ISpecialist>> {
        self.specialists.get(&kind).cloned()
    }

    pub fn len(&self) -> usize {
        self.specialists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specialists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juris_providers::mocks::ScriptedCompletion;

    #[test]
    fn default_registry_covers_every_specialist_kind() {
        let registry = SpecialistRegistry::with_default_specialists(Arc::new(
            ScriptedCompletion::new().otherwise("[]"),
        ));
        for kind in AgentKind::SPECIALISTS {
            assert!(registry.get(kind).is_some(), "missing specialist {kind}");
        }
    }
}
