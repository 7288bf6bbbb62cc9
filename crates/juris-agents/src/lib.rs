//! # juris-agents
//!
//! The specialist pool and the safety gate. Each specialist transforms
//! (query, evidence) into draft claims via the completion provider; the
//! registry is the extension point for new legal domains.

pub mod parse;
pub mod prompts;
pub mod registry;
pub mod safety;
pub mod specialist;

pub use registry::SpecialistRegistry;
pub use safety::SafetyGate;
