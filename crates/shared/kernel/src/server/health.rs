use axum::http::header;
use axum::{Json, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    /// Status
    status: &'static str,
    /// Version
    version: &'static str,
}

/// Lightweight liveness endpoint to test the wire.
///
/// Returns a fixed payload; the dev proxy and uptime checks poll it without
/// exercising the prediction pipeline.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = OK, description = "Healthcheck endpoint", body = HealthResponse)),
    tag = "system",
)]
#[allow(clippy::unused_async)]
pub(super) async fn health_handler() -> impl IntoResponse {
    let body = HealthResponse { status: "ok", version: env!("CARGO_PKG_VERSION") };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
