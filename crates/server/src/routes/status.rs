//! Liveness, health and metrics endpoints

use axum::{Extension, Json, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

/// Plain-text liveness string served at `/`
pub const LIVENESS_MESSAGE: &str = "Backend is running";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// GET / - Liveness probe
pub async fn root() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /health - Process health; never touches the completion service
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// GET /metrics - Render collected metrics in Prometheus text format
pub async fn metrics(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    handle.render()
}
