//! Fixed strings stored in the result column when a row cannot be generated.

/// Stored for a row whose prompt cell is empty.
pub const EMPTY_PROMPT_MARKER: &str = "エラー: プロンプトが空です";

/// Prefix of results produced when the remote API call failed.
pub const REMOTE_ERROR_PREFIX: &str = "APIエラー: ";

/// Prefix of results produced when local synthesis failed.
pub const LOCAL_ERROR_PREFIX: &str = "ローカル生成エラー: ";

/// Whether a stored result is one of the error markers rather than a diary.
///
/// Blanking such a cell makes the row pending again on the next run.
///
/// # Examples
///
/// ```
/// use diarist_core::{is_error_marked, EMPTY_PROMPT_MARKER};
///
/// assert!(is_error_marked(EMPTY_PROMPT_MARKER));
/// assert!(is_error_marked("APIエラー: quota exceeded"));
/// assert!(!is_error_marked("2026年10月16日\n今日は事件を解決した。"));
/// ```
pub fn is_error_marked(result: &str) -> bool {
    result == EMPTY_PROMPT_MARKER
        || result.starts_with(REMOTE_ERROR_PREFIX)
        || result.starts_with(LOCAL_ERROR_PREFIX)
}
