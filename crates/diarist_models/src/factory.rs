//! Generator selection from configuration.

use crate::LocalGenerator;
use diarist_error::DiaristResult;
use diarist_interface::DiaryGenerator;
use diarist_rate_limit::{DiaristConfig, GeneratorKind};

/// Build the generator for `kind` from `config`.
///
/// # Errors
///
/// Fails for the remote backend when no API key is configured, or when the
/// crate was built without the `gemini` feature.
#[tracing::instrument(skip(config))]
pub fn build_generator(
    kind: GeneratorKind,
    config: &DiaristConfig,
) -> DiaristResult<Box<dyn DiaryGenerator>> {
    match kind {
        GeneratorKind::Local => Ok(Box::new(LocalGenerator::new(&config.table, config.local.seed))),
        #[cfg(feature = "gemini")]
        GeneratorKind::Gemini => Ok(Box::new(crate::GeminiGenerator::new(&config.gemini)?)),
        #[cfg(not(feature = "gemini"))]
        GeneratorKind::Gemini => Err(diarist_error::ConfigError::new(
            "gemini generator requested but the `gemini` feature is disabled",
        )
        .into()),
    }
}
