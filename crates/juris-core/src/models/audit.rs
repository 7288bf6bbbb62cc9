//! Audit events handed to the external audit sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::intent::Intent;
use crate::models::chunk::TenantId;
use crate::models::plan::AgentKind;
use crate::models::response::SafetyStatus;

/// What happened during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditKind {
    QueryCompleted {
        intent: Intent,
        agents_used: BTreeSet<AgentKind>,
        confidence_score: f64,
        safety_check: SafetyStatus,
    },
    QueryRefused {
        reason: String,
    },
    AgentFailed {
        agent: AgentKind,
        reason: String,
    },
    /// Broken invariant (tenant isolation). Distinct from ordinary failures
    /// so downstream alerting can page on it.
    SecurityAlert {
        detail: String,
    },
}

/// One audit record. Exactly one `QueryCompleted`/`QueryRefused` (or a
/// `SecurityAlert` for an aborted run) is emitted per query; `AgentFailed`
/// records accompany partial failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub tenant_id: TenantId,
    pub query_id: Uuid,
    pub kind: AuditKind,
}

impl AuditEvent {
    pub fn new(tenant_id: TenantId, query_id: Uuid, kind: AuditKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            tenant_id,
            query_id,
            kind,
        }
    }
}
