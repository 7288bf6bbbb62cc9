/// Specialist and classifier errors.
///
/// These cross the call boundary only inside a stage; the orchestrator folds
/// them into `AgentOutcome::Failure` data rather than propagating them.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("malformed agent output: {reason}")]
    MalformedOutput { reason: String },
}
