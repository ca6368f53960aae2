//! Prediction response models

use serde::{Deserialize, Serialize};

/// Outcome of one inference call.
///
/// Field order is the wire order: `threshold`, `prob_churn`, `churn_pred`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub threshold: f64,
    pub prob_churn: f64,
    pub churn_pred: u8,
}

impl PredictionResult {
    /// Apply the decision threshold. Inclusive: a probability equal to the
    /// threshold is a positive prediction.
    pub fn from_probability(prob_churn: f64, threshold: f64) -> Self {
        Self {
            threshold,
            prob_churn,
            churn_pred: u8::from(prob_churn >= threshold),
        }
    }

    pub fn is_churn(&self) -> bool {
        self.churn_pred == 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub threshold: f64,
}

impl HealthResponse {
    pub fn ok(threshold: f64) -> Self {
        Self {
            status: "ok".to_string(),
            threshold,
        }
    }
}

/// Error body returned by the API on any rejected request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
