//! Google Gemini REST backend.
//!
//! One `generate_content` call per row, wrapped in backoff for transient HTTP
//! failures. Pacing between rows is the batch runner's concern, not this
//! client's.

use async_trait::async_trait;
use diarist_core::{ItemContext, REMOTE_ERROR_PREFIX, prepend_date_line};
use diarist_error::{DiaristError, DiaristResult, GeminiError, GeminiErrorKind};
use diarist_interface::{DiaryGenerator, GenerationOutcome};
use diarist_rate_limit::{GeminiConfig, execute_with_retry};
use gemini_rust::{Gemini, client::Model};
use tracing::instrument;

/// Wrap a row prompt in the diary-writing instruction sent to the model.
///
/// # Examples
///
/// ```
/// use diarist_models::build_instruction;
///
/// let text = build_instruction("雨の日の事件");
/// assert!(text.contains("プロンプト: 雨の日の事件"));
/// assert!(text.ends_with("日記:"));
/// ```
pub fn build_instruction(prompt: &str) -> String {
    format!(
        "以下のプロンプトに基づいて、江戸川コナンの日記を生成してください。\n\
         日記は自然で読みやすく、コナンの視点から書かれたものにしてください。\n\
         \n\
         プロンプト: {prompt}\n\
         \n\
         要求事項:\n\
         - 日本語で書く\n\
         - コナンの視点から書く\n\
         - 自然な日記の文体にする\n\
         - 200-500文字程度にする\n\
         - 日付は含めない（後で追加する）\n\
         \n\
         日記:"
    )
}

/// Diary generator backed by the Gemini API.
///
/// # Example
///
/// ```no_run
/// use diarist_core::ItemContext;
/// use diarist_interface::DiaryGenerator;
/// use diarist_models::GeminiGenerator;
/// use diarist_rate_limit::DiaristConfig;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DiaristConfig::load()?.with_api_key(std::env::var("GEMINI_API_KEY")?);
/// let generator = GeminiGenerator::new(&config.gemini)?;
/// let outcome = generator.generate("探偵団と遠足", &ItemContext::default()).await;
/// println!("{}", outcome.text());
/// # Ok(())
/// # }
/// ```
pub struct GeminiGenerator {
    client: Gemini,
    model: String,
    max_retries: usize,
}

impl std::fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("model", &self.model)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl GeminiGenerator {
    /// Create a client for the configured model.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] if no credential was
    /// supplied, or [`GeminiErrorKind::ClientCreation`] if the SDK client
    /// cannot be built.
    #[instrument(skip(config), fields(model = %config.model))]
    pub fn new(config: &GeminiConfig) -> DiaristResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| DiaristError::from(GeminiError::new(GeminiErrorKind::MissingApiKey)))?;

        let client = Gemini::with_model(api_key, Self::model_name_to_enum(&config.model))
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        tracing::info!(model = %config.model, max_retries = config.max_retries, "Created Gemini generator");

        Ok(Self {
            client,
            model: config.model.clone(),
            max_retries: config.max_retries,
        })
    }

    /// Convert a model name string to the SDK's Model enum.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Send `text` as a single user message and return the trimmed reply.
    #[instrument(skip(self, text), fields(model = %self.model, text_len = text.len()))]
    pub async fn complete(&self, text: &str) -> Result<String, GeminiError> {
        let client = &self.client;
        execute_with_retry("gemini.generate_content", self.max_retries, move || async move {
            client
                .generate_content()
                .with_user_message(text)
                .execute()
                .await
                .map_err(parse_gemini_error)
        })
        .await
        .and_then(|response| {
            let reply = response.text().trim().to_string();
            if reply.is_empty() {
                Err(GeminiError::new(GeminiErrorKind::EmptyResponse))
            } else {
                Ok(reply)
            }
        })
    }
}

#[async_trait]
impl DiaryGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str, _context: &ItemContext) -> GenerationOutcome {
        let outcome = diary_outcome(self.complete(&build_instruction(prompt)).await);
        if !outcome.is_generated() {
            tracing::warn!(model = %self.model, result = outcome.text(), "Gemini generation failed");
        }
        outcome
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Dated diary on success, `APIエラー: ` marker on failure.
fn diary_outcome(reply: Result<String, GeminiError>) -> GenerationOutcome {
    let result = reply.map(|body| prepend_date_line(&body)).map_err(|e| e.kind);
    GenerationOutcome::from_result(result, REMOTE_ERROR_PREFIX)
}

/// Classify an SDK failure by the HTTP status embedded in its message.
fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
    let message = err.to_string();
    let kind = match extract_status_code(&message) {
        Some(status_code) => GeminiErrorKind::HttpError {
            status_code,
            message,
        },
        None => GeminiErrorKind::ApiRequest(message),
    };
    GeminiError::new(kind)
}

// SDK messages read "bad response from server; code 503; description: ...".
fn extract_status_code(message: &str) -> Option<u16> {
    let (_, rest) = message.split_once("code ")?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
