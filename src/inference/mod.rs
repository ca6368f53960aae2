//! Inference Module
//!
//! Artifact loading, the feature record handed to the model, and the
//! thresholded predict call shared by the API, CLI and dashboard.

pub mod artifact;
pub mod error;
pub mod loader;
pub mod predictor;
pub mod record;
pub mod threshold;

// Re-export common types
pub use artifact::{ChurnModel, LogisticPipeline};
pub use error::{ArtifactError, InferenceError};
pub use loader::Artifacts;
pub use predictor::Predictor;
pub use record::{FeatureRecord, FeatureValue};
pub use threshold::{ThresholdConfig, DEFAULT_THRESHOLD};
