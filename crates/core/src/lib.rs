//! rx-core: Prescription review domain types
//!
//! This crate provides the framework-free pieces of the review flow:
//! request validation, prompt rendering, the requested result shape,
//! and the client-facing error payload.

pub mod error;
pub mod outcome;
pub mod prompt;
pub mod request;
pub mod result;

pub use error::ValidationError;
pub use outcome::{ANALYSIS_FAILED_MESSAGE, ErrorBody, MISSING_INPUT_MESSAGE};
pub use prompt::{AnalysisPrompt, build_prompt};
pub use request::{AnalysisRequest, RawAnalysisRequest};
pub use result::{AnalysisResult, Issue, RiskLevel};
