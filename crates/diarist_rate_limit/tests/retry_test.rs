use diarist_error::{GeminiError, GeminiErrorKind};
use diarist_rate_limit::execute_with_retry;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use std::sync::atomic::{AtomicUsize, Ordering};

fn http(status_code: u16) -> GeminiError {
    GeminiError::new(GeminiErrorKind::HttpError {
        status_code,
        message: "test".to_string(),
    })
}

#[tokio::test(start_paused = true)]
async fn test_transient_error_is_retried_until_success() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let result = execute_with_retry("generate", 3, || {
        let counter = counter.clone();
        async move {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            if n < 2 { Err(http(503)) } else { Ok("ok".to_string()) }
        }
    })
    .await;

    assert_eq!(result.unwrap(), "ok");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_permanent_error_fails_immediately() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let result: Result<String, _> = execute_with_retry("generate", 3, || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(http(401))
        }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_retries_capped_by_max_retries() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let result: Result<String, _> = execute_with_retry("generate", 2, || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(http(429))
        }
    })
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err.kind, GeminiErrorKind::HttpError { status_code: 429, .. }));
    // One initial attempt plus two retries
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_zero_retries_disables_backoff() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let result: Result<String, _> = execute_with_retry("generate", 0, || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(http(503))
        }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_every_retry_waits_for_backoff() {
    let start = Instant::now();
    let attempts = Arc::new(Mutex::new(Vec::new()));
    let log = attempts.clone();

    let result: Result<String, _> = execute_with_retry("generate", 2, || {
        let log = log.clone();
        async move {
            log.lock().unwrap().push(start.elapsed());
            Err(http(429))
        }
    })
    .await;

    assert!(result.is_err());
    let attempts = attempts.lock().unwrap().clone();
    assert_eq!(attempts.len(), 3, "attempts at {:?}", attempts);
    assert_eq!(attempts[0], Duration::ZERO);
    for pair in attempts.windows(2) {
        assert!(pair[1] > pair[0], "retry without backoff: {:?}", attempts);
    }
    // 429 backoff is capped at 60 s per wait
    assert!(attempts[2] <= Duration::from_secs(120));
}
