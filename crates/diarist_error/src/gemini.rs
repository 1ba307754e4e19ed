//! Errors raised by the Gemini diary backend.

/// HTTP statuses worth another attempt.
pub const TRANSIENT_STATUS_CODES: [u16; 6] = [408, 429, 500, 502, 503, 504];

/// What went wrong talking to Gemini.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// No credential was supplied; checked before any row is touched
    #[display("GEMINI_API_KEY is not set; the gemini generator needs a credential")]
    MissingApiKey,
    /// The SDK rejected the client settings
    #[display("Could not set up the Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request failed without an HTTP status
    #[display("Gemini request failed: {}", _0)]
    ApiRequest(String),
    /// Service answered with an error status
    #[display("Gemini returned HTTP {}: {}", status_code, message)]
    HttpError {
        /// Status returned by the service
        status_code: u16,
        /// Body or description from the service
        message: String,
    },
    /// Service answered but the reply held no text
    #[display("Gemini reply contained no text")]
    EmptyResponse,
}

impl GeminiErrorKind {
    /// HTTP status, when the service sent one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Whether another attempt may succeed.
    ///
    /// Only the statuses in [`TRANSIENT_STATUS_CODES`] qualify. Missing
    /// credentials, client setup failures and empty replies are final.
    pub fn is_retryable(&self) -> bool {
        self.status_code()
            .is_some_and(|code| TRANSIENT_STATUS_CODES.contains(&code))
    }

    /// Backoff for this kind as `(initial_backoff_ms, max_retries, max_delay_secs)`.
    ///
    /// Quota errors start slow since the free tier refills per minute.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self.status_code() {
            Some(429) => (4000, 3, 60),
            Some(503) => (2000, 4, 30),
            Some(408) => (2000, 3, 20),
            Some(500 | 502 | 504) => (1000, 3, 8),
            _ => (2000, 3, 30),
        }
    }
}

/// Gemini failure with the source location that raised it.
///
/// # Examples
///
/// ```
/// use diarist_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(err.to_string().contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini: {} (line {} in {})", kind, line, file)]
pub struct GeminiError {
    /// Failure category
    pub kind: GeminiErrorKind,
    /// Line that raised the error
    pub line: u32,
    /// File that raised the error
    pub file: &'static str,
}

impl GeminiError {
    /// Wrap `kind`, recording the caller's location.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Classification used by the retry helper.
///
/// # Examples
///
/// ```
/// use diarist_error::{GeminiError, GeminiErrorKind, RetryableError};
///
/// let quota = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 429,
///     message: "Resource exhausted".to_string(),
/// });
/// assert!(quota.is_retryable());
/// assert_eq!(quota.retry_strategy_params().0, 4000);
///
/// let denied = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 403,
///     message: "Permission denied".to_string(),
/// });
/// assert!(!denied.is_retryable());
/// ```
pub trait RetryableError {
    /// True when the failure is transient.
    fn is_retryable(&self) -> bool;

    /// `(initial_backoff_ms, max_retries, max_delay_secs)` for this failure.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 3, 30)
    }
}

impl RetryableError for GeminiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}
