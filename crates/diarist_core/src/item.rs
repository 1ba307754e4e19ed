//! A single row of the working table.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Read-only context columns of a row, in header order.
///
/// # Examples
///
/// ```
/// use diarist_core::ItemContext;
///
/// let context = ItemContext::new(vec![
///     ("日付".to_string(), "2024/04/01".to_string()),
///     ("エピソード".to_string(), "月と星の事件".to_string()),
/// ]);
/// assert_eq!(context.get("エピソード"), Some("月と星の事件"));
/// assert_eq!(context.get("登場人物"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemContext {
    fields: Vec<(String, String)>,
}

impl ItemContext {
    /// Create a context from `(column, value)` pairs.
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value of `column`, if the table has that column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the table has `column`, blank or not.
    pub fn has_column(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == column)
    }

    /// Iterate `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One unit of pending or completed generation work.
///
/// `result` is the only completion signal: `None` means pending, `Some` holds
/// either a diary or an error marker. Blank cells never become `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WorkItem {
    /// Zero-based position in the table, stable across save and reload
    id: usize,
    /// Generation prompt, `None` when the cell is blank
    prompt: Option<String>,
    /// Generated text, `None` while pending
    result: Option<String>,
    /// Remaining columns
    context: ItemContext,
}

impl WorkItem {
    /// Create a row, normalising blank prompt and result cells to `None`.
    pub fn new(
        id: usize,
        prompt: Option<String>,
        result: Option<String>,
        context: ItemContext,
    ) -> Self {
        Self {
            id,
            prompt: prompt.filter(|p| !p.trim().is_empty()),
            result: result.filter(|r| !r.trim().is_empty()),
            context,
        }
    }

    /// Whether the row still needs generation.
    pub fn is_pending(&self) -> bool {
        self.result.is_none()
    }

    /// Store generated text. Blank text leaves the row pending.
    pub(crate) fn set_result(&mut self, text: String) {
        self.result = Some(text).filter(|r| !r.trim().is_empty());
    }
}
