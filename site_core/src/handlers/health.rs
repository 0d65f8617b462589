//! Health check handlers

use crate::{models::ApiResponse, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.metrics.get_snapshot();

    Json(ApiResponse::success(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "version": state.version,
        "uptime_seconds": snapshot.uptime_seconds,
        "relay_configured": state.contact_service.is_relay_configured(),
    })))
}

/// Not ready until the relay can accept leads.
pub async fn handle_readiness(State(state): State<AppState>) -> impl IntoResponse {
    if state.contact_service.is_relay_configured() {
        (
            StatusCode::OK,
            Json(ApiResponse::success(json!({
                "status": "ready",
                "timestamp": chrono::Utc::now().timestamp()
            }))),
        )
    } else {
        warn!("Readiness check failed: relay access key is not configured");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::error(
                "Service not ready: relay_not_configured".to_string(),
            )),
        )
    }
}

pub async fn handle_liveness() -> impl IntoResponse {
    Json(ApiResponse::success(json!({
        "status": "alive",
        "timestamp": chrono::Utc::now().timestamp()
    })))
}
