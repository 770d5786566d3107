use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Database section of the health payload.
#[derive(Serialize)]
pub struct DatabaseHealth {
    /// `connected` or `error`.
    pub status: &'static str,
    pub error: Option<String>,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving requests.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub timestamp: String,
    pub database: DatabaseHealth,
}

/// GET /api/health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match portfolio_db::health_check(&state.pool).await {
        Ok(()) => DatabaseHealth {
            status: "connected",
            error: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "Health check could not reach the database");
            DatabaseHealth {
                status: "error",
                error: Some(e.to_string()),
            }
        }
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        database,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
