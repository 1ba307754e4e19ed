//! Column layout of the working table.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Names of the columns the batch engine gives meaning to.
///
/// Every other column is carried through untouched as item context.
///
/// # Examples
///
/// ```
/// use diarist_core::TableSchema;
///
/// let schema = TableSchema::default();
/// assert_eq!(schema.prompt_column(), "生成プロンプト");
/// assert_eq!(schema.result_column(), "生成結果");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct TableSchema {
    /// Column holding the generation prompt
    #[serde(default = "default_prompt_column")]
    prompt_column: String,
    /// Column receiving the generated diary
    #[serde(default = "default_result_column")]
    result_column: String,
    /// Optional context column naming the episode
    #[serde(default = "default_episode_column")]
    episode_column: String,
    /// Optional context column naming the featured character
    #[serde(default = "default_character_column")]
    character_column: String,
}

fn default_prompt_column() -> String {
    "生成プロンプト".to_string()
}

fn default_result_column() -> String {
    "生成結果".to_string()
}

fn default_episode_column() -> String {
    "エピソード".to_string()
}

fn default_character_column() -> String {
    "登場人物".to_string()
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            prompt_column: default_prompt_column(),
            result_column: default_result_column(),
            episode_column: default_episode_column(),
            character_column: default_character_column(),
        }
    }
}

impl TableSchema {
    /// Create a schema with explicit prompt and result columns and the
    /// default context columns.
    pub fn new(prompt_column: impl Into<String>, result_column: impl Into<String>) -> Self {
        Self {
            prompt_column: prompt_column.into(),
            result_column: result_column.into(),
            ..Self::default()
        }
    }

    /// Override the context columns read by the local generator.
    pub fn with_context_columns(
        mut self,
        episode_column: impl Into<String>,
        character_column: impl Into<String>,
    ) -> Self {
        self.episode_column = episode_column.into();
        self.character_column = character_column.into();
        self
    }

    /// Validates that no column name is blank and prompt and result differ.
    pub fn validate(&self) -> Result<(), String> {
        for (label, name) in [
            ("prompt_column", &self.prompt_column),
            ("result_column", &self.result_column),
            ("episode_column", &self.episode_column),
            ("character_column", &self.character_column),
        ] {
            if name.trim().is_empty() {
                return Err(format!("{} must not be empty", label));
            }
        }
        if self.prompt_column == self.result_column {
            return Err(format!(
                "prompt_column and result_column must differ, both are '{}'",
                self.prompt_column
            ));
        }
        Ok(())
    }
}
