//! Capability traits at the seams of the engine.
//!
//! External collaborators (completion, embedding, evidence store, audit) and
//! the specialist extension point are all narrow, mockable interfaces so the
//! orchestration logic is unit-testable without a real model.

mod audit;
mod completion;
mod embedding;
mod specialist;
mod store;

pub use audit::IAuditSink;
pub use completion::{CompletionRequest, ICompletionProvider};
pub use embedding::IEmbeddingProvider;
pub use specialist::ISpecialist;
pub use store::IEvidenceStore;
