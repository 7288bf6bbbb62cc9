//! # juris-engine
//!
//! The orchestration layer: classifies the query, plans which specialists
//! run, executes them in parallel against tenant-scoped evidence, and
//! assembles a verified, cited answer. All collaborators arrive as trait
//! objects, so the whole pipeline runs against test doubles.

pub mod assembler;
pub mod classifier;
pub mod pipeline;
pub mod planner;
pub mod telemetry;

pub use classifier::IntentClassifier;
pub use pipeline::JurisEngine;
