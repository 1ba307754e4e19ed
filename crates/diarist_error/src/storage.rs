//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Neither the output nor the input artifact exists
    #[display("Artifact not found: {}", _0)]
    NotFound(String),
    /// Restore requested but no backup has been written
    #[display("No backup available: {}", _0)]
    NoBackup(String),
    /// Failed to create a parent directory
    #[display("Failed to create directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to read file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Failed to write file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Artifact is not valid CSV
    #[display("Failed to parse table: {}", _0)]
    Parse(String),
    /// A report could not be rendered
    #[display("Failed to serialize: {}", _0)]
    Serialize(String),
    /// A required column is absent from the header
    #[display("Missing column '{}' in {}", column, path)]
    MissingColumn {
        /// Column name
        column: String,
        /// Artifact path
        path: String,
    },
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use diarist_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("/data/prompts.csv".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
