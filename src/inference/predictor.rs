//! Inference function
//!
//! `Predictor` is the immutable, cheaply cloneable handle that every
//! request surface shares. It owns the model and threshold for the life of
//! the process.

use std::fmt;
use std::sync::Arc;

use super::artifact::ChurnModel;
use super::error::InferenceError;
use super::record::FeatureRecord;
use super::threshold::ThresholdConfig;
use crate::models::{CustomerProfile, PredictionResult};

#[derive(Clone)]
pub struct Predictor {
    model: Arc<dyn ChurnModel>,
    threshold: ThresholdConfig,
}

impl Predictor {
    pub fn new(model: Arc<dyn ChurnModel>, threshold: ThresholdConfig) -> Self {
        Self { model, threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold.value()
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Score one customer.
    pub fn predict(&self, profile: &CustomerProfile) -> Result<PredictionResult, InferenceError> {
        profile.check().map_err(InferenceError::InvalidProfile)?;

        let record = FeatureRecord::from_profile(profile);
        let prob = self.model.predict_proba(&record)?;

        if !(0.0..=1.0).contains(&prob) {
            return Err(InferenceError::InvalidProbability(prob));
        }

        let result = PredictionResult::from_probability(prob, self.threshold());

        tracing::debug!(
            prob_churn = result.prob_churn,
            churn_pred = result.churn_pred,
            "Prediction computed"
        );

        Ok(result)
    }
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("model", &self.model.name())
            .field("threshold", &self.threshold.value())
            .finish()
    }
}
