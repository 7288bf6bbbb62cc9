//! # juris-core
//!
//! Foundation crate for the Juris legal query engine.
//! Defines all types, traits, errors, config, and the intent taxonomy.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::JurisConfig;
pub use errors::{JurisError, JurisResult};
pub use intent::Intent;
pub use models::{
    AgentKind, AgentOutcome, AuditEvent, Chunk, Claim, ExecutionPlan, FinalResponse, Query,
    RetrievalResult, SafetyStatus, SafetyVerdict, VerifiedClaim,
};
