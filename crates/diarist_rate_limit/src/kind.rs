//! Generator selection.

use serde::{Deserialize, Serialize};

/// Which generator backend a run uses.
///
/// # Examples
///
/// ```
/// use diarist_rate_limit::GeneratorKind;
/// use std::str::FromStr;
///
/// assert_eq!(GeneratorKind::from_str("gemini").unwrap(), GeneratorKind::Gemini);
/// assert_eq!(GeneratorKind::Local.to_string(), "local");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GeneratorKind {
    /// Template synthesis, no network
    #[default]
    Local,
    /// Google Gemini REST API
    Gemini,
}
