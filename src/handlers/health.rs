//! Health check handler

use axum::{extract::State, Json};

use crate::app::AppState;
use crate::models::HealthResponse;

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.predictor.threshold()))
}
