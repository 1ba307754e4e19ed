//! Offline template generator.

use crate::templates::{
    DIARY_TEMPLATES, UNKNOWN_CHARACTER, UNKNOWN_EPISODE, append_suffixes, character_from_prompt,
    render_template,
};
use async_trait::async_trait;
use diarist_core::{ItemContext, LOCAL_ERROR_PREFIX, TableSchema, prepend_date_line};
use diarist_error::GenerationError;
use diarist_interface::{DiaryGenerator, GenerationOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Synthesises a diary from fixed templates without any external call.
///
/// Episode and character come from the row's context columns when the
/// episode column exists, otherwise the character is guessed from keywords
/// in the prompt. Template choice is random; pass a seed for reproducible
/// output.
///
/// # Example
///
/// ```
/// use diarist_core::{ItemContext, TableSchema};
/// use diarist_interface::DiaryGenerator;
/// use diarist_models::LocalGenerator;
///
/// # #[tokio::main]
/// # async fn main() {
/// let generator = LocalGenerator::new(&TableSchema::default(), Some(7));
/// let outcome = generator.generate("今日の推理", &ItemContext::default()).await;
/// assert!(outcome.text().ends_with(" 推理が冴えていた一日だった。"));
/// # }
/// ```
#[derive(Debug)]
pub struct LocalGenerator {
    episode_column: String,
    character_column: String,
    rng: Mutex<StdRng>,
}

impl LocalGenerator {
    /// Create a generator reading context columns named by `schema`.
    ///
    /// `seed` fixes the template sequence; `None` seeds from entropy.
    pub fn new(schema: &TableSchema, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            episode_column: schema.episode_column().clone(),
            character_column: schema.character_column().clone(),
            rng: Mutex::new(rng),
        }
    }

    fn episode_and_character<'a>(
        &self,
        prompt: &str,
        context: &'a ItemContext,
    ) -> (&'a str, &'a str) {
        if context.has_column(&self.episode_column) {
            let non_blank = |column: &str| context.get(column).filter(|v| !v.trim().is_empty());
            (
                non_blank(&self.episode_column).unwrap_or(UNKNOWN_EPISODE),
                non_blank(&self.character_column).unwrap_or(UNKNOWN_CHARACTER),
            )
        } else {
            (UNKNOWN_EPISODE, character_from_prompt(prompt))
        }
    }

    fn compose(&self, prompt: &str, context: &ItemContext) -> Result<String, GenerationError> {
        let index = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|e| GenerationError::new(format!("template selector unavailable: {}", e)))?;
            rng.gen_range(0..DIARY_TEMPLATES.len())
        };

        let (episode, character) = self.episode_and_character(prompt, context);
        let body = render_template(DIARY_TEMPLATES[index], episode, character);
        Ok(prepend_date_line(&append_suffixes(body, prompt)))
    }
}

#[async_trait]
impl DiaryGenerator for LocalGenerator {
    #[tracing::instrument(skip(self, context), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str, context: &ItemContext) -> GenerationOutcome {
        let outcome = GenerationOutcome::from_result(
            self.compose(prompt, context).map_err(|e| e.message),
            LOCAL_ERROR_PREFIX,
        );
        if !outcome.is_generated() {
            tracing::warn!(result = outcome.text(), "Local generation failed");
        }
        outcome
    }

    fn provider_name(&self) -> &'static str {
        "local"
    }

    fn model_name(&self) -> &str {
        "templates"
    }
}
