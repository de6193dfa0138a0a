use axum::extract::State;
use serde::Serialize;
use tracing::warn;
use userhub_core::ApiResponse;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: String,
    /// `up` or `down`
    #[schema(example = "up")]
    pub database: String,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is running", body = String, content_type = "text/plain")
    ),
    tag = "Health"
)]
pub async fn root() -> &'static str {
    "Backend is running"
}

/// Service and database health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health report; payload in `data`", body = HealthStatus)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> ApiResponse<HealthStatus> {
    let database = match state.store.ping().await {
        Ok(()) => "up",
        Err(e) => {
            warn!(error = ?e.error, "Database health check failed");
            "down"
        }
    };

    ApiResponse::data(HealthStatus {
        status: "ok".to_string(),
        database: database.to_string(),
    })
}
