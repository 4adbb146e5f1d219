//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `UP` or `DOWN`.
    pub status: String,
    /// Back-end reachability.
    pub database: String,
    /// Crate version.
    pub version: String,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database_up = match state.database.health_check().await {
        Ok(up) => up,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    let (status, label) = if database_up {
        (StatusCode::OK, "UP")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "DOWN")
    };
    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            database: if database_up { "connected" } else { "unreachable" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
