//! Prescription review via the completion service

use rx_core::{AnalysisPrompt, AnalysisResult};
use serde_json::Value as JsonValue;

use super::client::{CompletionError, OpenAiClient};

/// Run one review: send the prompt, parse the generated text strictly as JSON.
///
/// The parsed value is returned as-is. It is compared against the requested
/// `AnalysisResult` shape only to log deviations.
pub async fn analyze(
    client: &OpenAiClient,
    prompt: &AnalysisPrompt,
) -> Result<JsonValue, CompletionError> {
    let outcome = run(client, prompt).await;

    let label = match &outcome {
        Ok(_) => "success",
        Err(e) => e.kind(),
    };
    metrics::counter!("analysis_outcomes_total", "outcome" => label).increment(1);

    outcome
}

async fn run(client: &OpenAiClient, prompt: &AnalysisPrompt) -> Result<JsonValue, CompletionError> {
    let text = client.complete(prompt.as_str()).await?;
    let parsed = parse_content(&text)?;

    match AnalysisResult::inspect(&parsed) {
        Ok(result) => {
            tracing::info!(
                risk_level = result.risk_level.as_str(),
                issues = result.issues.len(),
                "Prescription analysis completed"
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, "Model output deviates from requested shape");
        }
    }

    Ok(parsed)
}

/// Parse model output as JSON. Code fences or surrounding prose are rejected.
fn parse_content(text: &str) -> Result<JsonValue, CompletionError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json() {
        let value = parse_content(r#"{"risk_level": "低リスク"}"#).unwrap();
        assert_eq!(value["risk_level"], "低リスク");
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(parse_content("\n  {\"a\": 1}\n").is_ok());
    }

    #[test]
    fn rejects_prose() {
        let err = parse_content("I'm sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn rejects_code_fenced_json() {
        let err = parse_content("```json\n{\"a\": 1}\n```").unwrap_err();
        assert!(matches!(err, CompletionError::Malformed(_)));
    }

    #[test]
    fn rejects_trailing_text() {
        assert!(parse_content("{\"a\": 1} Hope this helps!").is_err());
    }
}
