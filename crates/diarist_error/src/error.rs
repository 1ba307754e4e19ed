//! Top-level error wrapper types.

use crate::{
    BatchError, BuilderError, ConfigError, GeminiError, GenerationError, StorageError,
};

/// Every error family the workspace can surface.
///
/// # Examples
///
/// ```
/// use diarist_error::{ConfigError, DiaristError};
///
/// let err: DiaristError = ConfigError::new("requests_per_minute must be positive").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum DiaristErrorKind {
    /// Row store or backup error
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini API error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Generation adapter error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Batch runner error
    #[from(BatchError)]
    Batch(BatchError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Diarist error with kind discrimination.
///
/// # Examples
///
/// ```
/// use diarist_error::{DiaristErrorKind, DiaristResult, StorageError, StorageErrorKind};
///
/// fn might_fail() -> DiaristResult<()> {
///     Err(StorageError::new(StorageErrorKind::NoBackup("backup.csv".to_string())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), DiaristErrorKind::Storage(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Diarist Error: {}", _0)]
pub struct DiaristError(Box<DiaristErrorKind>);

impl DiaristError {
    /// Create a new error from a kind.
    pub fn new(kind: DiaristErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DiaristErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to DiaristErrorKind
impl<T> From<T> for DiaristError
where
    T: Into<DiaristErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Diarist operations.
pub type DiaristResult<T> = std::result::Result<T, DiaristError>;
