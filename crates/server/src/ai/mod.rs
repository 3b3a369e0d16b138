//! Prescription review powered by an OpenAI-compatible completion API

pub mod analyzer;
pub mod client;

pub use client::{CompletionError, OpenAiClient};
