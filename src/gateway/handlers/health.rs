//! Health check handler

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode};
use utoipa::ToSchema;

use super::super::state::AppState;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
    /// Crate version
    #[schema(example = "0.1.0")]
    pub version: &'static str,
}

/// Health check endpoint.
///
/// Pings the database when one is configured; the memory-store
/// deployment is always healthy.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, StatusCode> {
    if let Some(ref db) = state.db {
        if let Err(e) = db.health_check().await {
            tracing::error!("health check: database ping failed: {}", e);
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Ok(Json(HealthResponse {
        timestamp_ms,
        version: env!("CARGO_PKG_VERSION"),
    }))
}
