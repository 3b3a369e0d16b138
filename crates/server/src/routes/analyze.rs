//! Prescription analysis endpoint

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use rx_core::{RawAnalysisRequest, build_prompt};
use serde_json::Value as JsonValue;

use crate::ai::{self, OpenAiClient};
use crate::error::AppError;

/// POST /api/analyze — Review a prescription for an elderly patient
///
/// Validates `age`, `gender` and `prescription`, renders the review prompt,
/// sends it upstream and relays the model's JSON verbatim.
pub async fn analyze(
    State(client): State<OpenAiClient>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<JsonValue>, AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let request = RawAnalysisRequest::from_value(body)?.validate()?;
    let prompt = build_prompt(&request);

    tracing::debug!(prompt_len = prompt.as_str().len(), "Sending analysis prompt");

    let result = ai::analyzer::analyze(&client, &prompt).await?;
    Ok(Json(result))
}
