#![cfg(feature = "gemini")]

//! Tests for the Gemini generator and the generator factory.

use diarist_core::ItemContext;
use diarist_error::{DiaristErrorKind, GeminiErrorKind};
use diarist_interface::DiaryGenerator;
use diarist_models::{GeminiGenerator, build_generator, build_instruction};
use diarist_rate_limit::{DiaristConfig, GeneratorKind};

#[test]
fn test_missing_api_key_is_fatal() {
    let config = DiaristConfig::bundled().unwrap();

    let err = GeminiGenerator::new(&config.gemini).unwrap_err();
    assert!(matches!(
        err.kind(),
        DiaristErrorKind::Gemini(e) if e.kind == GeminiErrorKind::MissingApiKey
    ));

    assert!(build_generator(GeneratorKind::Gemini, &config).is_err());
}

#[test]
fn test_blank_api_key_is_missing() {
    let config = DiaristConfig::bundled().unwrap().with_api_key("   ");
    assert!(GeminiGenerator::new(&config.gemini).is_err());
}

#[test]
fn test_factory_selects_backend() -> anyhow::Result<()> {
    let config = DiaristConfig::bundled()?.with_api_key("test-key");

    let local = build_generator(GeneratorKind::Local, &config)?;
    assert_eq!(local.provider_name(), "local");

    let remote = build_generator(GeneratorKind::Gemini, &config)?;
    assert_eq!(remote.provider_name(), "gemini");
    assert_eq!(remote.model_name(), "gemini-2.5-flash-lite");
    Ok(())
}

#[test]
fn test_instruction_wraps_prompt() {
    let text = build_instruction("少年探偵団と遠足");

    assert!(text.starts_with("以下のプロンプトに基づいて、江戸川コナンの日記を生成してください。"));
    assert!(text.contains("\nプロンプト: 少年探偵団と遠足\n"));
    assert!(text.contains("- 200-500文字程度にする"));
    assert!(text.contains("- 日付は含めない（後で追加する）"));
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_live_generation() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("GEMINI_API_KEY")?;
    let config = DiaristConfig::bundled()?.with_api_key(api_key);
    let generator = GeminiGenerator::new(&config.gemini)?;

    let outcome = generator
        .generate("博士の新しい発明", &ItemContext::default())
        .await;

    assert!(outcome.is_generated(), "generation failed: {}", outcome.text());
    Ok(())
}
