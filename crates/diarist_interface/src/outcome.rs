//! Result of one generation attempt.

use serde::{Deserialize, Serialize};

/// What a generator produced for one row.
///
/// Both variants carry the exact text to store in the result column.
///
/// # Examples
///
/// ```
/// use diarist_interface::GenerationOutcome;
///
/// let ok = GenerationOutcome::Generated("2026年10月16日\n本文".to_string());
/// assert!(ok.is_generated());
///
/// let failed = GenerationOutcome::failed("APIエラー: ", "quota exceeded");
/// assert_eq!(failed.text(), "APIエラー: quota exceeded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationOutcome {
    /// Diary text
    Generated(String),
    /// Marker-prefixed failure message
    Failed(String),
}

impl GenerationOutcome {
    /// Build a failure whose text is `prefix` followed by `message`.
    pub fn failed(prefix: &str, message: impl std::fmt::Display) -> Self {
        Self::Failed(format!("{}{}", prefix, message))
    }

    /// Collapse an adapter-internal result, rendering errors behind `prefix`.
    pub fn from_result<E: std::fmt::Display>(
        result: Result<String, E>,
        prefix: &str,
    ) -> Self {
        match result {
            Ok(text) => Self::Generated(text),
            Err(e) => Self::failed(prefix, e),
        }
    }

    /// True for [`GenerationOutcome::Generated`].
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// Text to store.
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) | Self::Failed(text) => text,
        }
    }
}
