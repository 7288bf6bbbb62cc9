//! Span definitions per pipeline stage: classification, retrieval,
//! specialists, verification.
//!
//! Each span carries the query id and stage metadata via the `tracing`
//! crate. `init_tracing` installs a subscriber honoring `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Create a classification span.
#[macro_export]
macro_rules! classification_span {
    ($query_id:expr) => {
        tracing::info_span!("juris.classification", query = %$query_id)
    };
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query_id:expr, $tenant:expr) => {
        tracing::info_span!("juris.retrieval", query = %$query_id, tenant = %$tenant)
    };
}

/// Create a specialist span.
#[macro_export]
macro_rules! specialist_span {
    ($query_id:expr, $agent:expr) => {
        tracing::info_span!("juris.specialist", query = %$query_id, agent = %$agent)
    };
}

/// Create a verification span.
#[macro_export]
macro_rules! verification_span {
    ($query_id:expr, $claims:expr) => {
        tracing::info_span!("juris.verification", query = %$query_id, claims = $claims)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CLASSIFICATION: &str = "juris.classification";
    pub const RETRIEVAL: &str = "juris.retrieval";
    pub const SPECIALIST: &str = "juris.specialist";
    pub const VERIFICATION: &str = "juris.verification";
}
