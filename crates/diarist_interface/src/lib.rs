//! Trait definitions for the Diarist batch diary generator.
//!
//! This crate provides the generation capability the batch runner drives,
//! independent of whether text comes from a local synthesizer or a remote
//! API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod outcome;
mod traits;

pub use outcome::GenerationOutcome;
pub use traits::DiaryGenerator;
