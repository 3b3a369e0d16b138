pub mod analyze;
pub mod status;

use axum::{Router, routing::post};

use crate::ai::OpenAiClient;

/// Build API routes
pub fn api_routes() -> Router<OpenAiClient> {
    Router::new().route("/analyze", post(analyze::analyze))
}
