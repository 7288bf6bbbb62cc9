use async_trait::async_trait;

use crate::errors::JurisResult;
use crate::models::AuditEvent;

/// External audit/logging collaborator.
///
/// Call sites treat `record` as fire-and-forget: a sink failure must never
/// fail the user-facing request.
#[async_trait]
pub trait IAuditSink: Send + Sync {
    async fn record(&self, event: AuditEvent) -> JurisResult<()>;
}
