//! # juris-retrieval
//!
//! Evidence retrieval for the Juris engine: embed the query, fetch a
//! tenant-scoped candidate pool, enforce the isolation invariant, and
//! rerank with Maximal Marginal Relevance for diverse, relevant evidence.

pub mod engine;
pub mod mmr;
pub mod similarity;
pub mod store;

pub use engine::RetrievalEngine;
pub use store::InMemoryEvidenceStore;
