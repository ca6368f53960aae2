//! Artifact loader
//!
//! Loads the model and threshold once, at startup.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::artifact::LogisticPipeline;
use super::error::ArtifactError;
use super::predictor::Predictor;
use super::threshold::ThresholdConfig;

/// Everything a process needs to serve predictions
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub pipeline: LogisticPipeline,
    pub threshold: ThresholdConfig,
}

impl Artifacts {
    /// Model failures are fatal; threshold failures fall back to the default.
    pub fn load<M: AsRef<Path>, T: AsRef<Path>>(
        model_path: M,
        threshold_path: T,
    ) -> Result<Self, ArtifactError> {
        let model_path = model_path.as_ref();

        info!(path = %model_path.display(), "Loading model artifact");
        let pipeline = LogisticPipeline::load(model_path)?;
        info!(
            model = %pipeline.name,
            features = pipeline.feature_count(),
            "Model loaded successfully"
        );

        let threshold = ThresholdConfig::load_or_default(threshold_path);

        Ok(Self { pipeline, threshold })
    }

    pub fn into_predictor(self) -> Predictor {
        Predictor::new(Arc::new(self.pipeline), self.threshold)
    }
}
