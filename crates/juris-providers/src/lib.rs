//! # juris-providers
//!
//! Concrete implementations of the engine's external collaborator traits:
//! Gemini-style REST completion and embedding clients with bounded
//! exponential-backoff retry, plus deterministic test doubles in [`mocks`].

pub mod gemini;
pub mod mocks;
pub mod retry;

pub use gemini::{GeminiCompletion, GeminiConfig, GeminiEmbedding};
pub use retry::RetryPolicy;
