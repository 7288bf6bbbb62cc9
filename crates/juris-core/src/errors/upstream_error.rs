/// Errors from external collaborators (embedding, completion, evidence store).
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream call to {service} timed out after {timeout_ms}ms")]
    Timeout { service: String, timeout_ms: u64 },

    #[error("upstream service {service} unavailable: {reason}")]
    Unavailable { service: String, reason: String },

    #[error("upstream call to {service} failed after {attempts} attempts: {reason}")]
    RetriesExhausted {
        service: String,
        attempts: u32,
        reason: String,
    },

    #[error("upstream response from {service} could not be decoded: {reason}")]
    BadResponse { service: String, reason: String },
}
