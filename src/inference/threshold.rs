//! Decision Threshold Configuration
//!
//! The threshold file is `{"threshold": <float>}`. Anything wrong with it
//! falls back to the default rather than stopping the process.

use std::path::Path;

use thiserror::Error;

pub const DEFAULT_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdConfig {
    threshold: f64,
}

#[derive(Error, Debug)]
pub enum ThresholdError {
    #[error("threshold file not found")]
    NotFound,

    #[error("failed to read threshold file: {0}")]
    Io(#[from] std::io::Error),

    #[error("threshold file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("threshold file has no 'threshold' key")]
    MissingKey,

    #[error("'threshold' is not a number")]
    NotNumeric,

    #[error("threshold {0} is outside [0, 1]")]
    OutOfRange(f64),
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ThresholdConfig {
    pub fn new(threshold: f64) -> Result<Self, ThresholdError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ThresholdError::OutOfRange(threshold));
        }
        Ok(Self { threshold })
    }

    pub fn value(&self) -> f64 {
        self.threshold
    }

    /// Parse the contents of a threshold file
    pub fn parse(text: &str) -> Result<Self, ThresholdError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let meta: serde_json::Value = serde_json::from_str(text)?;

        let value = meta.get("threshold").ok_or(ThresholdError::MissingKey)?;
        let threshold = value.as_f64().ok_or(ThresholdError::NotNumeric)?;

        Self::new(threshold)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ThresholdError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ThresholdError::NotFound
            } else {
                ThresholdError::Io(e)
            }
        })?;

        Self::parse(&text)
    }

    /// Load the threshold, substituting [`DEFAULT_THRESHOLD`] on any failure
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        match Self::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), threshold = config.threshold, "Decision threshold loaded");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Using default decision threshold {}",
                    DEFAULT_THRESHOLD
                );
                Self::default()
            }
        }
    }
}
