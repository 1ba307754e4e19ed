//! Generator capability trait.

use crate::GenerationOutcome;
use async_trait::async_trait;
use diarist_core::ItemContext;

/// Core trait every diary backend implements.
///
/// `generate` is total: service, network and template failures come back as
/// [`GenerationOutcome::Failed`] carrying a marker-prefixed message, never as
/// an error or a panic. The batch runner relies on this to keep one bad row
/// from stopping the batch.
#[async_trait]
pub trait DiaryGenerator: Send + Sync {
    /// Turn one prompt (plus the row's context columns) into result text.
    async fn generate(&self, prompt: &str, context: &ItemContext) -> GenerationOutcome;

    /// Provider name (e.g., "local", "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash-lite").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<G: DiaryGenerator + ?Sized> DiaryGenerator for Box<G> {
    async fn generate(&self, prompt: &str, context: &ItemContext) -> GenerationOutcome {
        (**self).generate(prompt, context).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
