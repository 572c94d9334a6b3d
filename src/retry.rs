/*!
 * Bounded exponential-backoff retry for backend calls.
 *
 * The policy (attempt budget, delay schedule, retryable-error predicate) is
 * a plain value handed to whoever owns the fallible operation, so the same
 * policy can wrap any call without decorator machinery. All state lives in
 * one `run` invocation; nothing carries over between calls.
 */

use std::future::Future;
use std::time::Duration;

use log::{error, warn};

use crate::errors::ProviderError;

/// Predicate deciding whether a failure kind is safe to re-attempt
pub type RetryPredicate = fn(&ProviderError) -> bool;

/// Retry policy for a fallible operation
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total number of invocations before giving up
    pub max_attempts: u32,

    /// Delay before the first re-attempt
    pub initial_delay: Duration,

    /// Factor applied to the delay after every failed attempt
    pub backoff_multiplier: u32,

    /// Which failures are worth re-attempting
    pub retry_on: RetryPredicate,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(2),
            backoff_multiplier: 2,
            retry_on: ProviderError::is_retryable,
        }
    }
}

impl RetryPolicy {
    /// Create a policy that retries every failure kind.
    pub fn new(max_attempts: u32, initial_delay: Duration, backoff_multiplier: u32) -> Self {
        Self {
            max_attempts,
            initial_delay,
            backoff_multiplier,
            retry_on: |_| true,
        }
    }

    /// Replace the retryable-error predicate.
    pub fn retry_on(mut self, predicate: RetryPredicate) -> Self {
        self.retry_on = predicate;
        self
    }

    /// The delay slept after `failed_attempts` failures: `d * b^failed`.
    pub fn delay_for(&self, failed_attempts: u32) -> Duration {
        self.initial_delay * self.backoff_multiplier.pow(failed_attempts)
    }

    /// Invoke `operation` until it succeeds, a non-retryable failure occurs,
    /// or the attempt budget is exhausted.
    ///
    /// The operation runs at most `max_attempts` times with sleeps of
    /// `d, d*b, d*b^2, ...` between consecutive attempts. The final failure
    /// is returned to the caller unchanged.
    pub async fn run<T, F, Fut>(&self, label: &str, mut operation: F) -> Result<T, ProviderError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ProviderError>>,
    {
        let mut attempt: u32 = 0;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if !(self.retry_on)(&e) {
                        return Err(e);
                    }

                    attempt += 1;
                    if attempt >= self.max_attempts {
                        error!(
                            "{}: giving up after {} attempts, last error: {}",
                            label, attempt, e
                        );
                        return Err(e);
                    }

                    let delay = self.delay_for(attempt - 1);
                    warn!(
                        "{}: attempt {}/{} failed: {}; retrying in {:.1}s",
                        label,
                        attempt,
                        self.max_attempts,
                        e,
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
