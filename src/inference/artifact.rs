//! Model artifact - logistic regression pipeline
//!
//! The artifact is a JSON document holding a fitted encoder/scaler plus
//! logistic regression:
//!
//! ```text
//!   numeric columns      ──► (x - mean) / scale ──┐
//!   categorical columns  ──► one-hot (unknown=0) ─┼──► intercept + w·x ──► sigmoid ──► P(churn)
//! ```
//!
//! Request surfaces only see the [`ChurnModel`] trait.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ArtifactError, InferenceError};
use super::record::{is_known_column, FeatureRecord};

/// Artifact layout version understood by this build
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Probability estimator for the positive (churn) class.
///
/// Implementations must be pure: no interior mutation during
/// `predict_proba`, so one instance can serve concurrent requests.
pub trait ChurnModel: Send + Sync {
    fn name(&self) -> &str;
    fn predict_proba(&self, record: &FeatureRecord) -> Result<f64, InferenceError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericStep {
    pub column: String,
    pub mean: f64,
    pub scale: f64,
    pub coefficient: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalStep {
    pub column: String,
    pub categories: Vec<String>,
    pub coefficients: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticPipeline {
    pub format_version: u32,
    #[serde(default = "default_name")]
    pub name: String,
    pub intercept: f64,
    #[serde(default)]
    pub numeric: Vec<NumericStep>,
    #[serde(default)]
    pub categorical: Vec<CategoricalStep>,
}

fn default_name() -> String {
    "logistic_pipeline".to_string()
}

impl LogisticPipeline {
    /// Read and validate an artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ArtifactError::NotFound(path.to_path_buf())
            } else {
                ArtifactError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let pipeline: Self = serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        pipeline.validate()?;
        Ok(pipeline)
    }

    /// Structural checks, so that a loaded pipeline can never fail on
    /// anything but the record it is given.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedFormat {
                found: self.format_version,
                expected: ARTIFACT_FORMAT_VERSION,
            });
        }

        if !self.intercept.is_finite() {
            return Err(ArtifactError::Invalid("intercept is not finite".to_string()));
        }

        if self.numeric.is_empty() && self.categorical.is_empty() {
            return Err(ArtifactError::Invalid("pipeline has no feature steps".to_string()));
        }

        let mut seen = HashSet::new();
        let columns = self
            .numeric
            .iter()
            .map(|s| &s.column)
            .chain(self.categorical.iter().map(|s| &s.column));

        for column in columns {
            if !is_known_column(column) {
                return Err(ArtifactError::Invalid(format!("unknown column '{}'", column)));
            }
            if !seen.insert(column.as_str()) {
                return Err(ArtifactError::Invalid(format!("column '{}' encoded twice", column)));
            }
        }

        for step in &self.numeric {
            if !(step.scale.is_finite() && step.scale > 0.0) {
                return Err(ArtifactError::Invalid(format!(
                    "column '{}': scale must be a positive number",
                    step.column
                )));
            }
            if !step.mean.is_finite() || !step.coefficient.is_finite() {
                return Err(ArtifactError::Invalid(format!(
                    "column '{}': non-finite parameter",
                    step.column
                )));
            }
        }

        for step in &self.categorical {
            if step.categories.len() != step.coefficients.len() {
                return Err(ArtifactError::Invalid(format!(
                    "column '{}': {} categories but {} coefficients",
                    step.column,
                    step.categories.len(),
                    step.coefficients.len()
                )));
            }
            let unique: HashSet<&str> = step.categories.iter().map(String::as_str).collect();
            if unique.len() != step.categories.len() {
                return Err(ArtifactError::Invalid(format!(
                    "column '{}': duplicate category",
                    step.column
                )));
            }
            if step.coefficients.iter().any(|c| !c.is_finite()) {
                return Err(ArtifactError::Invalid(format!(
                    "column '{}': non-finite coefficient",
                    step.column
                )));
            }
        }

        Ok(())
    }

    /// Width of the encoded feature vector
    pub fn feature_count(&self) -> usize {
        self.numeric.len() + self.categorical.iter().map(|s| s.categories.len()).sum::<usize>()
    }

    /// Linear score before the sigmoid
    pub fn decision_function(&self, record: &FeatureRecord) -> Result<f64, InferenceError> {
        let mut z = self.intercept;

        for step in &self.numeric {
            let value = record
                .get(&step.column)
                .ok_or_else(|| InferenceError::MissingColumn(step.column.clone()))?
                .as_f64()
                .ok_or_else(|| InferenceError::NotNumeric(step.column.clone()))?;

            z += step.coefficient * (value - step.mean) / step.scale;
        }

        for step in &self.categorical {
            let label = record
                .get(&step.column)
                .ok_or_else(|| InferenceError::MissingColumn(step.column.clone()))?
                .as_category();

            // Unknown category: all-zero block
            if let Some(idx) = step.categories.iter().position(|c| *c == label) {
                z += step.coefficients[idx];
            }
        }

        Ok(z)
    }
}

impl ChurnModel for LogisticPipeline {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict_proba(&self, record: &FeatureRecord) -> Result<f64, InferenceError> {
        let z = self.decision_function(record)?;
        Ok(sigmoid(z))
    }
}

/// Logistic function, stable for large |z|
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
