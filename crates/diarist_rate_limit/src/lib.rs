//! Pacing, retry and configuration.
//!
//! The batch runner is paced, not throttled: it sleeps a fixed delay after
//! each generation call (60 / requests-per-minute for the remote API, a short
//! constant for local synthesis). There is no burst allowance. Transient
//! remote failures are retried with exponential backoff before a row is
//! given up on.
//!
//! Configuration is layered TOML:
//! 1. Bundled defaults (`diarist.toml` shipped with the library)
//! 2. `~/.config/diarist/diarist.toml`
//! 3. `./diarist.toml`
//! 4. An explicit file passed by the caller
//! 5. `DIARIST_*` environment variables

mod config;
mod kind;
mod pacing;
mod retry;

pub use config::{DiaristConfig, GeminiConfig, LocalConfig, PathsConfig};
pub use kind::GeneratorKind;
pub use pacing::{Pacing, PacingBuilder};
pub use retry::execute_with_retry;
