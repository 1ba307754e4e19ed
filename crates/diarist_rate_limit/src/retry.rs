//! Exponential backoff for transient remote failures.

use diarist_error::RetryableError;
use std::future::Future;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{info, warn};

/// Run `operation`, retrying transient failures.
///
/// The first failure picks the backoff strategy from the error itself
/// ([`RetryableError::retry_strategy_params`]); `max_retries` caps the number
/// of extra attempts, so at most `max_retries + 1` calls are made and every
/// retry waits for its backoff delay. Permanent errors return immediately.
///
/// # Examples
///
/// ```
/// use diarist_error::GeminiError;
/// use diarist_rate_limit::execute_with_retry;
///
/// # async fn demo() -> Result<(), GeminiError> {
/// let text = execute_with_retry("generate", 3, || async {
///     Ok::<_, GeminiError>("diary".to_string())
/// })
/// .await?;
/// assert_eq!(text, "diary");
/// # Ok(())
/// # }
/// ```
pub async fn execute_with_retry<T, E, F, Fut>(
    operation_name: &str,
    max_retries: usize,
    mut operation: F,
) -> Result<T, E>
where
    E: RetryableError + std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let first = match operation().await {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    if !first.is_retryable() || max_retries == 0 {
        warn!(operation = operation_name, error = %first, "Permanent error, failing immediately");
        return Err(first);
    }

    let (initial_ms, strategy_retries, max_delay_secs) = first.retry_strategy_params();
    let retries = strategy_retries.min(max_retries);

    info!(
        operation = operation_name,
        error = %first,
        initial_backoff_ms = initial_ms,
        max_retries = retries,
        max_delay_secs,
        "Transient error, will retry with backoff"
    );

    let mut retry_strategy = ExponentialBackoff::from_millis(initial_ms)
        .factor(2)
        .max_delay(std::time::Duration::from_secs(max_delay_secs))
        .map(jitter)
        .take(retries);

    // Retry::spawn attempts immediately; the first retry still owes its backoff.
    if let Some(delay) = retry_strategy.next() {
        tokio::time::sleep(delay).await;
    }

    Retry::spawn(retry_strategy, || {
        let attempt = operation();
        async move {
            match attempt.await {
                Ok(value) => Ok(value),
                Err(e) => {
                    if e.is_retryable() {
                        warn!(operation = operation_name, error = %e, "Attempt failed, will retry");
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    } else {
                        warn!(operation = operation_name, error = %e, "Permanent error, failing immediately");
                        Err(RetryError::Permanent(e))
                    }
                }
            }
        }
    })
    .await
}
