//! Text generation client for the animation service.
//!
//! Handlers depend on the [`TextGenerator`] trait only; [`GeminiClient`] is
//! the production implementation and tests substitute their own.

pub mod gemini;
pub mod generator;

pub use gemini::{GeminiClient, GeminiConfig};
pub use generator::{GenerationError, TextGenerator};
