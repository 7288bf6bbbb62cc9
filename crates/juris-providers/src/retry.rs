//! Bounded exponential-backoff retry for upstream calls.
//!
//! Transient failures against the embedding or completion service are
//! retried at the provider; everything else propagates immediately.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use juris_core::errors::{JurisError, JurisResult, UpstreamError};

/// Retry schedule: `max_attempts` tries, delay doubling from `base_delay`.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay: Duration::from_millis(base_delay_ms),
        }
    }

    fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

/// Run `op`, retrying upstream failures per the policy.
///
/// Non-upstream errors are never retried. After exhaustion the last failure
/// is wrapped in `UpstreamError::RetriesExhausted`.
pub async fn with_retries<T, F, Fut>(
    policy: RetryPolicy,
    service: &str,
    mut op: F,
) -> JurisResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = JurisResult<T>>,
{
    let mut last_reason = String::new();
    for attempt in 1..=policy.max_attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(JurisError::Upstream(e)) => {
                warn!(service, attempt, error = %e, "upstream call failed");
                last_reason = e.to_string();
                if attempt < policy.max_attempts {
                    tokio::time::sleep(policy.delay_for(attempt)).await;
                }
            }
            Err(other) => return Err(other),
        }
    }
    Err(JurisError::Upstream(UpstreamError::RetriesExhausted {
        service: service.to_string(),
        attempts: policy.max_attempts,
        reason: last_reason,
    }))
}
