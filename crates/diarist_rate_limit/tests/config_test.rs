use diarist_rate_limit::{DiaristConfig, GeneratorKind};
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

#[test]
fn test_bundled_defaults() {
    let config = DiaristConfig::bundled().expect("bundled config parses");

    assert_eq!(config.gemini.model, "gemini-2.5-flash-lite");
    assert_eq!(config.gemini.requests_per_minute, 15);
    assert_eq!(config.gemini.checkpoint_interval, 5);
    assert_eq!(config.local.delay_ms, 100);
    assert_eq!(config.local.checkpoint_interval, 10);
    assert_eq!(config.table.prompt_column(), "生成プロンプト");
    assert_eq!(config.table.result_column(), "生成結果");
    assert!(config.api_key().is_none());
    config.validate().expect("bundled config is valid");
}

#[test]
fn test_pacing_per_generator() {
    let config = DiaristConfig::bundled().unwrap();

    let remote = config.pacing(GeneratorKind::Gemini).unwrap();
    assert_eq!(*remote.delay(), Duration::from_secs(4));
    assert_eq!(*remote.checkpoint_interval(), 5);

    let local = config.pacing(GeneratorKind::Local).unwrap();
    assert_eq!(*local.delay(), Duration::from_millis(100));
    assert_eq!(*local.checkpoint_interval(), 10);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[gemini]\nrequests_per_minute = 30\n\n[table]\nprompt_column = \"prompt\""
    )
    .unwrap();

    let config = DiaristConfig::from_file(file.path()).unwrap();
    assert_eq!(config.gemini.requests_per_minute, 30);
    assert_eq!(config.gemini.checkpoint_interval, 5);
    assert_eq!(config.table.prompt_column(), "prompt");
    assert_eq!(config.table.result_column(), "生成結果");
    assert_eq!(
        *config.pacing(GeneratorKind::Gemini).unwrap().delay(),
        Duration::from_secs(2)
    );
}

#[test]
fn test_api_key_ignored_in_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[gemini]\napi_key = \"from-file\"\nmax_retries = 1").unwrap();

    let config = DiaristConfig::from_file(file.path()).unwrap();
    assert_eq!(config.gemini.max_retries, 1);
    assert!(config.api_key().is_none());
}

#[test]
fn test_invalid_settings_rejected() {
    let mut config = DiaristConfig::bundled().unwrap();
    config.gemini.requests_per_minute = 0;
    assert!(config.validate().is_err());

    let mut config = DiaristConfig::bundled().unwrap();
    config.local.checkpoint_interval = 0;
    assert!(config.validate().is_err());
    assert!(config.pacing(GeneratorKind::Local).is_err());
}

#[test]
fn test_api_key_redacted_and_not_serialized() {
    let config = DiaristConfig::bundled().unwrap().with_api_key("secret-key");
    assert_eq!(config.api_key(), Some("secret-key"));
    assert!(!format!("{:?}", config).contains("secret-key"));
    assert!(!toml::to_string(&config).unwrap().contains("secret-key"));
}

#[test]
fn test_generator_kind_parsing() {
    assert_eq!(GeneratorKind::from_str("local").unwrap(), GeneratorKind::Local);
    assert_eq!(GeneratorKind::from_str("Gemini").unwrap(), GeneratorKind::Gemini);
    assert!(GeneratorKind::from_str("openai").is_err());
}
