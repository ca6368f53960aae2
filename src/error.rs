//! Error handling
//!
//! Every rejected prediction request answers `422` with a `detail` string.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::inference::InferenceError;
use crate::models::ErrorResponse;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Body could not be parsed into a CustomerProfile
    #[error("{0}")]
    InvalidRequest(String),

    // Parsed, but inference refused it
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "Prediction request rejected");

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}
