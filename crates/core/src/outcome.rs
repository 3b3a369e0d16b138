//! Client-facing error payload

use serde::Serialize;

/// Message returned when a required input field is absent or empty
pub const MISSING_INPUT_MESSAGE: &str = "入力が不足しています";

/// Message returned for any upstream, transport or parse failure
pub const ANALYSIS_FAILED_MESSAGE: &str = "解析に失敗しました";

/// JSON error body: `{ "error": "..." }`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Body for a request with missing input (400)
    pub fn missing_input() -> Self {
        Self::new(MISSING_INPUT_MESSAGE)
    }

    /// Generic body for a failed analysis (500); never carries upstream detail
    pub fn analysis_failed() -> Self {
        Self::new(ANALYSIS_FAILED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_single_error_field() {
        let json = serde_json::to_value(ErrorBody::analysis_failed()).unwrap();
        assert_eq!(json, serde_json::json!({"error": "解析に失敗しました"}));
    }
}
