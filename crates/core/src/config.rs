//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the
//! service, rather than read from ambient state during request handling.
//! Request-time environment reads behave inconsistently across
//! multi-threaded runtimes and test harnesses.

use crate::error::{ServiceError, ServiceResult};
use std::time::Duration;

/// Core configuration resolved at startup.
///
/// The only knob today is the artificial latency hook: an optional pause the
/// service facade awaits before each operation, standing in for the fetch
/// latency a real backend would add. Stores themselves never sleep.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    artificial_latency: Option<Duration>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidInput` if `artificial_latency` is
    /// `Some(Duration::ZERO)` - omit the value to disable the hook.
    pub fn new(artificial_latency: Option<Duration>) -> ServiceResult<Self> {
        if artificial_latency.is_some_and(|d| d.is_zero()) {
            return Err(ServiceError::InvalidInput(
                "artificial_latency must be non-zero; omit it to disable the hook".into(),
            ));
        }

        Ok(Self { artificial_latency })
    }

    pub fn artificial_latency(&self) -> Option<Duration> {
        self.artificial_latency
    }
}
