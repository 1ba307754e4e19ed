//! Layered TOML configuration.
//!
//! Precedence (later sources override earlier):
//! - Bundled defaults (include_str! from diarist.toml)
//! - `~/.config/diarist/diarist.toml`
//! - `./diarist.toml`
//! - An explicit file, if given
//! - `DIARIST_*` environment variables (`__` separates nested keys)

use crate::{GeneratorKind, Pacing};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use diarist_core::TableSchema;
use diarist_error::{ConfigError, DiaristError, DiaristResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../diarist.toml");

/// File locations for a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// CSV the prompts are read from on a fresh run
    pub input: PathBuf,
    /// CSV the working table is checkpointed to, and resumed from
    pub output: PathBuf,
    /// Snapshot taken before a run mutates anything
    pub backup: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("prompts.csv"),
            output: PathBuf::from("results.csv"),
            backup: PathBuf::from("backup.csv"),
        }
    }
}

/// Settings for the offline template generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalConfig {
    /// Pause after each row, in milliseconds
    pub delay_ms: u64,
    /// Rows per checkpoint
    pub checkpoint_interval: usize,
    /// Fixed RNG seed for reproducible template choice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            delay_ms: 100,
            checkpoint_interval: 10,
            seed: None,
        }
    }
}

/// Settings for the Gemini generator.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Model identifier
    pub model: String,
    /// Pacing budget; the runner sleeps `60 / rpm` seconds per call
    pub requests_per_minute: u32,
    /// Rows per checkpoint
    pub checkpoint_interval: usize,
    /// Attempts made on transient HTTP failures before giving up on a row
    pub max_retries: usize,
    /// Credential, injected by the binary from `GEMINI_API_KEY`; config
    /// files and `DIARIST_*` variables cannot set it
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash-lite".to_string(),
            requests_per_minute: 15,
            checkpoint_interval: 5,
            max_retries: 3,
            api_key: None,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("model", &self.model)
            .field("requests_per_minute", &self.requests_per_minute)
            .field("checkpoint_interval", &self.checkpoint_interval)
            .field("max_retries", &self.max_retries)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Top-level Diarist configuration.
///
/// # Example
///
/// ```no_run
/// use diarist_rate_limit::{DiaristConfig, GeneratorKind};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DiaristConfig::load()?;
/// let pacing = config.pacing(GeneratorKind::Gemini)?;
/// println!("Checkpoint every {} rows", pacing.checkpoint_interval());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct DiaristConfig {
    /// File locations
    #[serde(default)]
    pub paths: PathsConfig,
    /// Column names
    #[serde(default)]
    pub table: TableSchema,
    /// Local generator settings
    #[serde(default)]
    pub local: LocalConfig,
    /// Gemini generator settings
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl DiaristConfig {
    /// Bundled defaults only, ignoring user files and the environment.
    #[instrument]
    pub fn bundled() -> DiaristResult<Self> {
        build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> DiaristResult<Self> {
        debug!("Loading configuration from file");
        build(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// Load the standard layers with no explicit file.
    pub fn load() -> DiaristResult<Self> {
        Self::load_with(None)
    }

    /// Load the standard layers, then `explicit` (required if given), then
    /// `DIARIST_*` environment variables.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument(fields(explicit = ?explicit.map(|p| p.display().to_string())))]
    pub fn load_with(explicit: Option<&Path>) -> DiaristResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/diarist/diarist.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("diarist").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DIARIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = build(builder)?;
        config.validate()?;
        Ok(config)
    }

    /// Attach the remote credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.gemini.api_key = Some(api_key.into());
        self
    }

    /// The remote credential, if one was supplied.
    pub fn api_key(&self) -> Option<&str> {
        self.gemini.api_key.as_deref()
    }

    /// Check the settings a run depends on.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid setting.
    pub fn validate(&self) -> DiaristResult<()> {
        self.table
            .validate()
            .map_err(|msg| DiaristError::from(ConfigError::new(msg)))?;
        if self.gemini.requests_per_minute == 0 {
            return Err(ConfigError::new("gemini.requests_per_minute must be positive").into());
        }
        if self.gemini.checkpoint_interval == 0 {
            return Err(ConfigError::new("gemini.checkpoint_interval must be at least 1").into());
        }
        if self.local.checkpoint_interval == 0 {
            return Err(ConfigError::new("local.checkpoint_interval must be at least 1").into());
        }
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::new("gemini.model must not be empty").into());
        }
        Ok(())
    }

    /// Pacing parameters for the given backend.
    pub fn pacing(&self, kind: GeneratorKind) -> DiaristResult<Pacing> {
        match kind {
            GeneratorKind::Local => Pacing::fixed(
                Duration::from_millis(self.local.delay_ms),
                self.local.checkpoint_interval,
            ),
            GeneratorKind::Gemini => Pacing::per_minute(
                self.gemini.requests_per_minute,
                self.gemini.checkpoint_interval,
            ),
        }
    }
}

fn build(builder: ConfigBuilder<DefaultState>) -> DiaristResult<DiaristConfig> {
    builder
        .build()
        .map_err(|e| {
            DiaristError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?
        .try_deserialize()
        .map_err(|e| {
            DiaristError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })
}
