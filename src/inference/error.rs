//! Inference error types

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the model artifact. Fatal at startup.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Model not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read model {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed model artifact {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported artifact format version {found} (expected {expected})")]
    UnsupportedFormat { found: u32, expected: u32 },

    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}

/// Failure during a single prediction. Surfaced to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("{0}")]
    InvalidProfile(String),

    #[error("Column {0} missing from feature record")]
    MissingColumn(String),

    #[error("Column {0} cannot be converted to a number")]
    NotNumeric(String),

    #[error("Model produced an invalid probability: {0}")]
    InvalidProbability(f64),
}
