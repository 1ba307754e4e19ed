//! Gemini connectivity check.

use diarist::{DiaristConfig, DiaristResult};

/// Execute `diarist ping`.
#[cfg(feature = "gemini")]
pub async fn run_ping(
    model: Option<&str>,
    message: &str,
    mut config: DiaristConfig,
) -> DiaristResult<()> {
    use diarist::GeminiGenerator;

    if let Some(model) = model {
        config.gemini.model = model.to_string();
    }

    println!("Connecting to {}...", config.gemini.model);
    let generator = GeminiGenerator::new(&config.gemini)?;

    let reply = generator.complete(message).await?;
    println!("Reply from {}:", config.gemini.model);
    println!("{}", reply);
    Ok(())
}

/// Execute `diarist ping`.
#[cfg(not(feature = "gemini"))]
pub async fn run_ping(
    _model: Option<&str>,
    _message: &str,
    _config: DiaristConfig,
) -> DiaristResult<()> {
    Err(diarist::ConfigError::new("ping requires the `gemini` feature").into())
}
