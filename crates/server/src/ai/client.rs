//! OpenAI chat-completions client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model used for every review
pub const MODEL: &str = "gpt-4.1";

/// Low sampling temperature biases toward conservative, repeatable output
pub const TEMPERATURE: f32 = 0.2;

/// Failures talking to the completion service or reading its output
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Completion API error ({status}): {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode completion response: {0}")]
    InvalidEnvelope(#[source] reqwest::Error),

    #[error("Completion response contained no choices")]
    EmptyChoices,

    #[error("Completion message has no text content")]
    MissingContent,

    #[error("Model output is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl CompletionError {
    /// Short label used for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::Malformed(_) => "malformed_response",
            _ => "upstream_error",
        }
    }
}

/// Client for an OpenAI-compatible chat-completions endpoint
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Request body for the chat-completions API
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

/// Response from the chat-completions API
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Message,
}

impl OpenAiClient {
    /// Create a new client for the given base URL (e.g. `https://api.openai.com/v1`)
    pub fn new(api_key: String, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a single user message and return the generated text
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: Some(prompt.to_string()),
            }],
            temperature: TEMPERATURE,
        };

        let response = self.send(&request).await?;
        extract_text(response)
    }

    /// Send a chat request and decode the response envelope
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(CompletionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Upstream { status, body });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(CompletionError::InvalidEnvelope)
    }
}

/// Take the text of the first choice
pub fn extract_text(response: ChatResponse) -> Result<String, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::EmptyChoices)?;

    choice.message.content.ok_or(CompletionError::MissingContent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> ChatResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_body_has_expected_shape() {
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: Some("hello".to_string()),
            }],
            temperature: TEMPERATURE,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], "gpt-4.1");
        assert_eq!(body["messages"], json!([{"role": "user", "content": "hello"}]));
        assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn extracts_first_choice() {
        let response = envelope(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"a\":1}"}},
                {"index": 1, "message": {"role": "assistant", "content": "other"}}
            ]
        }));
        assert_eq!(extract_text(response).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let response = envelope(json!({"choices": []}));
        assert!(matches!(
            extract_text(response),
            Err(CompletionError::EmptyChoices)
        ));
    }

    #[test]
    fn null_content_is_an_error() {
        let response = envelope(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }));
        assert!(matches!(
            extract_text(response),
            Err(CompletionError::MissingContent)
        ));
    }

    #[test]
    fn endpoint_joins_base_url() {
        let client = OpenAiClient::new("sk".into(), "http://127.0.0.1:9/v1/");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/v1/chat/completions");
    }

    #[test]
    fn malformed_kind_is_distinguished() {
        let err: CompletionError = serde_json::from_str::<serde_json::Value>("nope")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), "malformed_response");
        assert_eq!(CompletionError::EmptyChoices.kind(), "upstream_error");
    }
}
