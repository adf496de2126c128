//! Retry with exponential backoff
//!
//! Every API call goes through [`retry_with_backoff`]. Retryable failures
//! (transport errors, 429 and 5xx responses) are attempted again up to
//! `max_retries` times; anything else is returned immediately. A 429 that
//! carries a server hint waits for that hint instead of the backoff delay.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use tracing::{debug, warn};

use crate::constants::{defaults, rate_limit};
use crate::github::error::{GitHubError, Result};

/// Configuration for exponential backoff retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries after the initial attempt.
    pub max_retries: u32,

    /// Delay before the first retry; doubled for each following one.
    pub base_delay: Duration,
}

impl RetryConfig {
    /// 3 retries waiting 1s, 2s and 4s.
    pub const DEFAULT: Self = Self {
        max_retries: defaults::MAX_RETRIES,
        base_delay: Duration::from_millis(defaults::BACKOFF_BASE_MS),
    };

    /// A single attempt, no retries.
    pub const NONE: Self = Self {
        max_retries: 0,
        base_delay: Duration::ZERO,
    };

    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Delay before retry number `attempt` (0-indexed): `base * 2^attempt`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// All backoff delays in order.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        (0..self.max_retries).map(|attempt| self.delay_for_attempt(attempt))
    }

    /// Upper bound on the total backoff wait, ignoring server hints.
    pub fn total_max_wait(&self) -> Duration {
        self.delays().sum()
    }

    /// How long to wait after `error` before retry number `attempt`.
    pub fn wait_after(&self, error: &GitHubError, attempt: u32) -> Duration {
        match error {
            GitHubError::RateLimited {
                retry_after: Some(hint),
            } => *hint,
            _ => self.delay_for_attempt(attempt),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reads the server's wait hint from a rate-limited response.
///
/// `Retry-After` (seconds) wins; otherwise `X-RateLimit-Reset` (epoch
/// seconds) gives the wait until the reset plus one second. Returns `None`
/// when neither header is usable. Only the delta-seconds form of
/// `Retry-After` is read: an HTTP-date value is ignored, so the caller falls
/// back to exponential backoff.
pub fn rate_limit_delay(headers: &HeaderMap, now: DateTime<Utc>) -> Option<Duration> {
    let header_u64 = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
    };

    if let Some(seconds) = header_u64(rate_limit::RETRY_AFTER) {
        return Some(Duration::from_secs(seconds));
    }

    let reset = header_u64(rate_limit::RESET)?;
    let now = u64::try_from(now.timestamp()).unwrap_or(0);
    Some(Duration::from_secs(reset.saturating_sub(now) + 1))
}

/// Executes an async operation with retry logic.
///
/// # Arguments
///
/// * `config` - Retry budget and backoff base
/// * `operation` - Called once per attempt until it succeeds, fails fatally,
///   or the budget is spent
///
/// # Returns
///
/// The first success, the first fatal error, or
/// [`GitHubError::ExhaustedRetries`] wrapping the last retryable error.
pub async fn retry_with_backoff<T, F, Fut>(config: RetryConfig, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if !err.is_retryable() => {
                debug!(error = %err, "request failed with a fatal error");
                return Err(err);
            }
            Err(err) => {
                if attempt >= config.max_retries {
                    return Err(GitHubError::ExhaustedRetries {
                        attempts: attempt + 1,
                        last: Box::new(err),
                    });
                }

                let delay = config.wait_after(&err, attempt);
                warn!(
                    error = %err,
                    attempt = attempt + 1,
                    max_retries = config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    "retrying request"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use reqwest::StatusCode;
    use reqwest::header::HeaderValue;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(max_retries: u32) -> RetryConfig {
        RetryConfig::new(max_retries, Duration::from_millis(1))
    }

    fn server_error() -> GitHubError {
        GitHubError::from_status(StatusCode::BAD_GATEWAY, "", None)
    }

    #[test]
    fn test_default_delays_double() {
        let delays: Vec<_> = RetryConfig::DEFAULT.delays().collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4)
            ]
        );
        assert_eq!(RetryConfig::DEFAULT.total_max_wait(), Duration::from_secs(7));
    }

    #[test]
    fn test_delay_saturates() {
        let config = RetryConfig::new(100, Duration::from_secs(1));
        assert!(config.delay_for_attempt(64) >= config.delay_for_attempt(31));
    }

    #[test]
    fn test_rate_limit_hint_overrides_backoff() {
        let config = fast(3);
        let err = GitHubError::RateLimited {
            retry_after: Some(Duration::from_secs(9)),
        };
        assert_eq!(config.wait_after(&err, 0), Duration::from_secs(9));

        let err = GitHubError::RateLimited { retry_after: None };
        assert_eq!(config.wait_after(&err, 2), Duration::from_millis(4));
    }

    #[test]
    fn test_retry_after_header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("12"));
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("99999999999"));
        assert_eq!(
            rate_limit_delay(&headers, Utc::now()),
            Some(Duration::from_secs(12))
        );
    }

    #[test]
    fn test_reset_header_waits_until_reset() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1700000030"));
        assert_eq!(rate_limit_delay(&headers, now), Some(Duration::from_secs(31)));

        // A reset in the past still waits a second.
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1699999000"));
        assert_eq!(rate_limit_delay(&headers, now), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_no_hint_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(rate_limit_delay(&headers, Utc::now()), None);
        headers.insert("retry-after", HeaderValue::from_static("Wed, 21 Oct 2015"));
        assert_eq!(rate_limit_delay(&headers, Utc::now()), None);
    }

    #[tokio::test]
    async fn test_success_first_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result = retry_with_backoff(fast(3), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, GitHubError>(42) }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result = retry_with_backoff(fast(3), move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(server_error())
                } else {
                    Ok("done")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_fatal_error_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: Result<()> = retry_with_backoff(fast(3), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(GitHubError::from_status(StatusCode::NOT_FOUND, "", None)) }
        })
        .await;

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_exhausted_retries_counts_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: Result<()> = retry_with_backoff(fast(2), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(server_error()) }
        })
        .await;

        match result.unwrap_err() {
            GitHubError::ExhaustedRetries { attempts, last } => {
                assert_eq!(attempts, 3);
                assert!(matches!(*last, GitHubError::Server { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_retries_makes_one_call() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: Result<()> = retry_with_backoff(RetryConfig::NONE, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(server_error()) }
        })
        .await;

        assert!(matches!(
            result.unwrap_err(),
            GitHubError::ExhaustedRetries { attempts: 1, .. }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
