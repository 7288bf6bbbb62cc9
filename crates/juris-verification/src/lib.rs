//! # juris-verification
//!
//! The fact-checking pass: every draft claim is scored against the evidence
//! it cites, unsupported claims are pruned, and the surviving set yields a
//! bounded aggregate confidence score plus ordered citations.

pub mod citations;
pub mod engine;
pub mod entailment;

pub use engine::VerificationEngine;
