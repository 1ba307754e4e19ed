//! Generation adapter error types.

/// Failure inside a generation adapter.
///
/// Adapters never let this escape to the batch runner; it is rendered into
/// the stored result text instead.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", message, line, file)]
pub struct GenerationError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use diarist_error::GenerationError;
    ///
    /// let err = GenerationError::new("template slot missing");
    /// assert_eq!(err.message, "template slot missing");
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
