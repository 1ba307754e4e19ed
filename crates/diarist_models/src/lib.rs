//! Diary generator backends.
//!
//! Each backend implements [`DiaryGenerator`](diarist_interface::DiaryGenerator)
//! and is chosen once, at construction time, by [`build_generator`].
//!
//! # Available Backends
//!
//! - **Local** - Template synthesis with no network access (always available)
//! - **Gemini** (Google) - Enable with the `gemini` feature (off by default
//!   here; the `diarist` crate turns it on)
//!
//! # Example
//!
//! ```no_run
//! use diarist_core::ItemContext;
//! use diarist_interface::DiaryGenerator;
//! use diarist_models::build_generator;
//! use diarist_rate_limit::{DiaristConfig, GeneratorKind};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DiaristConfig::load()?;
//! let generator = build_generator(GeneratorKind::Local, &config)?;
//! let outcome = generator.generate("推理の一日", &ItemContext::default()).await;
//! println!("{}", outcome.text());
//! # Ok(())
//! # }
//! ```

mod factory;
mod local;
mod templates;

#[cfg(feature = "gemini")]
mod gemini;

pub use factory::build_generator;
pub use local::LocalGenerator;
pub use templates::{
    DIARY_TEMPLATES, UNKNOWN_CHARACTER, UNKNOWN_EPISODE, append_suffixes, character_from_prompt,
    render_template,
};

#[cfg(feature = "gemini")]
pub use gemini::{GeminiGenerator, build_instruction};
