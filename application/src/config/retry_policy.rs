//! Retry policy for provider calls.
//!
//! Disabled by default (`max_retries = 0`), so each request makes exactly one
//! provider call. When enabled, only transient failures are retried, using
//! exponential backoff with full jitter. Malformed model output is never
//! retried: at low temperature the same prompt tends to produce the same
//! reply.

use crate::ports::llm_gateway::GatewayError;
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first call.
    pub max_retries: u32,
    /// Backoff ceiling for the first retry.
    pub initial_backoff: Duration,
    /// Upper bound for any backoff ceiling.
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(4),
        }
    }
}

impl RetryPolicy {
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_backoff = initial;
        self.max_backoff = max;
        self
    }

    /// Whether a failed attempt number `attempt` (0-based) may be retried.
    pub fn should_retry(&self, attempt: u32, error: &GatewayError) -> bool {
        attempt < self.max_retries && error.is_transient()
    }

    /// Exponential ceiling: `initial * 2^attempt`, capped at `max_backoff`.
    pub fn backoff_ceiling(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.min(16));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    /// Full jitter: a uniform delay in `[0, backoff_ceiling(attempt)]`.
    pub fn jittered_delay<R: Rng>(&self, attempt: u32, rng: &mut R) -> Duration {
        let ceiling = self.backoff_ceiling(attempt);
        if ceiling.is_zero() {
            return ceiling;
        }
        ceiling.mul_f64(rng.gen_range(0.0..=1.0))
    }
}
