//! Execution plans and agent identifiers.

use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// Identifiers of the reasoning units in the pipeline.
///
/// `Safety` and `Verification` are cross-cutting mandatory stages; the rest
/// are domain specialists. Adding a legal domain means adding a variant here
/// and registering its implementation; the orchestrator does not branch on
/// individual specialists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Safety,
    Statutory,
    CaseLaw,
    Contract,
    Compliance,
    GeneralCounsel,
    Verification,
}

impl AgentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Safety => "safety",
            AgentKind::Statutory => "statutory",
            AgentKind::CaseLaw => "case_law",
            AgentKind::Contract => "contract",
            AgentKind::Compliance => "compliance",
            AgentKind::GeneralCounsel => "general_counsel",
            AgentKind::Verification => "verification",
        }
    }

    /// The domain specialists (everything except the mandatory stages).
    pub const SPECIALISTS: [AgentKind; 5] = [
        AgentKind::Statutory,
        AgentKind::CaseLaw,
        AgentKind::Contract,
        AgentKind::Compliance,
        AgentKind::GeneralCounsel,
    ];

    pub fn is_specialist(&self) -> bool {
        !matches!(self, AgentKind::Safety | AgentKind::Verification)
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The agents selected for one query, in execution order.
///
/// Always contains `Safety` and `Verification`; plan construction (a pure
/// function in the orchestrator) is the single place that enforces this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionPlan {
    pub intent: Intent,
    pub agents: Vec<AgentKind>,
}

impl ExecutionPlan {
    /// The specialist subset of the plan, in plan order.
    pub fn specialists(&self) -> impl Iterator<Item = AgentKind> + '_ {
        self.agents.iter().copied().filter(AgentKind::is_specialist)
    }

    pub fn contains(&self, kind: AgentKind) -> bool {
        self.agents.contains(&kind)
    }
}
