//! Prediction handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::app::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{CustomerProfile, PredictionResult};

/// Score one customer profile
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    let Json(body) = payload?;
    let profile = CustomerProfile::from_json(body).map_err(AppError::InvalidRequest)?;

    let result = state.predictor.predict(&profile)?;

    tracing::info!(
        prob_churn = result.prob_churn,
        churn_pred = result.churn_pred,
        "Prediction served"
    );

    Ok(Json(result))
}
