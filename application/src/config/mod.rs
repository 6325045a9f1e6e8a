//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`GenerationParams`]: model, sampling and output-policy settings for one call
//! - [`RetryPolicy`]: bounded, jittered retry of transient provider failures

pub mod generation_params;
pub mod retry_policy;

pub use generation_params::GenerationParams;
pub use retry_policy::RetryPolicy;
