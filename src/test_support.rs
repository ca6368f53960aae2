//! Shared fixtures for unit tests

use crate::inference::artifact::{CategoricalStep, LogisticPipeline, NumericStep, ARTIFACT_FORMAT_VERSION};
use crate::models::CustomerProfile;

pub(crate) const EXAMPLE: &str = r#"{
    "gender": "Female", "SeniorCitizen": 0, "Partner": "No", "Dependents": "No",
    "tenure": 2, "PhoneService": "Yes", "MultipleLines": "No",
    "InternetService": "Fiber optic", "OnlineSecurity": "No", "OnlineBackup": "No",
    "DeviceProtection": "No", "TechSupport": "No", "StreamingTV": "No",
    "StreamingMovies": "No", "Contract": "Month-to-month", "PaperlessBilling": "Yes",
    "PaymentMethod": "Electronic check", "MonthlyCharges": 85.0, "TotalCharges": 190.0
}"#;

pub(crate) fn example() -> CustomerProfile {
    serde_json::from_str(EXAMPLE).unwrap()
}

/// tenure (standardized) + Contract (one-hot)
pub(crate) fn tiny_pipeline() -> LogisticPipeline {
    LogisticPipeline {
        format_version: ARTIFACT_FORMAT_VERSION,
        name: "tiny".to_string(),
        intercept: -0.25,
        numeric: vec![NumericStep {
            column: "tenure".to_string(),
            mean: 12.0,
            scale: 10.0,
            coefficient: -1.0,
        }],
        categorical: vec![CategoricalStep {
            column: "Contract".to_string(),
            categories: vec![
                "Month-to-month".to_string(),
                "One year".to_string(),
                "Two year".to_string(),
            ],
            coefficients: vec![0.5, -0.1, -0.6],
        }],
    }
}
