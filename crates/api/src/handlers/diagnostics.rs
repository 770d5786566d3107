//! GET /api/diagnostics: deployment troubleshooting snapshot.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

const REDACTED: &str = "[redacted]";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsResponse {
    pub environment: String,
    pub public_url: String,
    /// Request headers as received, with credentials redacted.
    pub headers: BTreeMap<String, String>,
    pub database: String,
    pub server_time: String,
}

/// Flatten request headers, hiding credential-bearing ones.
fn visible_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if name == AUTHORIZATION || name == COOKIE {
                REDACTED.to_string()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            (name.as_str().to_string(), shown)
        })
        .collect()
}

pub async fn diagnostics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<DiagnosticsResponse> {
    let database = match portfolio_db::health_check(&state.pool).await {
        Ok(()) => "connected successfully".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable during diagnostics");
            format!("connection error: {e}")
        }
    };

    Json(DiagnosticsResponse {
        environment: state.config.app_env.clone(),
        public_url: state
            .config
            .public_base_url
            .clone()
            .unwrap_or_else(|| "not set".to_string()),
        headers: visible_headers(&headers),
        database,
        server_time: chrono::Utc::now().to_rfc3339(),
    })
}
