//! rx-server library crate
//!
//! Exposes `build_app` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

mod ai;
pub mod config;
mod error;
mod middleware;
mod routes;

use std::sync::OnceLock;

use axum::{Extension, Router, middleware as axum_mw, routing::get};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

pub use ai::client::{MODEL, TEMPERATURE};
pub use middleware::REQUEST_ID_HEADER;
pub use routes::status::LIVENESS_MESSAGE;

/// Install the global Prometheus recorder once and return its handle.
///
/// Repeated `build_app` calls (e.g. in integration tests) share the recorder
/// that is actually installed, so `/metrics` always renders live data.
fn prometheus_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            if let Err(e) = metrics::set_global_recorder(recorder) {
                tracing::warn!(error = %e, "Metrics recorder already installed");
            }
            handle
        })
        .clone()
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(config: &Config) -> Router {
    let client = ai::OpenAiClient::new(config.openai_api_key.clone(), &config.openai_base_url);
    tracing::debug!(endpoint = client.endpoint(), "Completion endpoint");

    let metrics_handle = prometheus_handle();

    let public_routes: Router<ai::OpenAiClient> = Router::new()
        .route("/", get(routes::status::root))
        .route("/health", get(routes::status::health))
        .route("/metrics", get(routes::status::metrics))
        .layer(Extension(metrics_handle));

    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(public_routes)
        .nest("/api", routes::api_routes())
        .with_state(client)
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
