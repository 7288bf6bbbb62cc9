//! Engine configuration.
//!
//! # Examples
//!
//! ```
//! use juris_core::config::JurisConfig;
//!
//! let config = JurisConfig::default();
//! assert_eq!(config.retrieval.top_k, 5);
//! assert!(config.retrieval.candidate_pool >= config.retrieval.top_k);
//! ```

mod agent_config;
mod retrieval_config;
mod verification_config;

pub use agent_config::AgentConfig;
pub use retrieval_config::RetrievalConfig;
pub use verification_config::VerificationConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{JurisError, JurisResult};

/// Top-level configuration for one engine instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JurisConfig {
    pub retrieval: RetrievalConfig,
    pub agents: AgentConfig,
    pub verification: VerificationConfig,
}

impl JurisConfig {
    /// Parse a TOML document; missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> JurisResult<Self> {
        toml::from_str(s).map_err(|e| JurisError::Config {
            reason: e.to_string(),
        })
    }
}
