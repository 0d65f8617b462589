use crate::{models::ApiResponse, AppState};
use axum::{extract::State, response::IntoResponse, Json};

pub async fn handle_metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(state.metrics.get_snapshot()))
}
