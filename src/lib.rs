//! Churn Predictor Library
//!
//! Serves a pre-trained customer-churn classifier three ways: an HTTP API,
//! a batch CLI and a small HTML dashboard. All of them go through the same
//! [`Predictor`], built once at startup from the model artifact and the
//! decision threshold file.

pub mod app;
pub mod batch;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod handlers;
pub mod inference;
pub mod logging;
pub mod models;

#[cfg(test)]
mod test_support;

pub use app::{create_router, AppState};
pub use config::{Config, DashboardConfig, DashboardMode};
pub use error::{AppError, AppResult};
pub use inference::{Artifacts, ArtifactError, InferenceError, Predictor};
pub use models::{CustomerProfile, PredictionResult};
