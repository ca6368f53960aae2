//! Batch prediction
//!
//! Core of the `predict` command: read one profile from a JSON file, score
//! it, render the result and optionally persist it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::inference::Predictor;
use crate::models::{CustomerProfile, PredictionResult};

/// Read a profile, tolerating a UTF-8 byte-order mark
pub fn read_profile(path: &Path) -> Result<CustomerProfile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input {}", path.display()))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let value: serde_json::Value = serde_json::from_str(text)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    CustomerProfile::from_json(value)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Invalid customer profile in {}", path.display()))
}

/// Two-space indented JSON
pub fn render(result: &PredictionResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize prediction")
}

/// Write `json` to `path`, creating parent directories as needed
pub fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Score `input` and return the rendered result. When `out` is given the
/// same text is written there.
pub fn run(predictor: &Predictor, input: &Path, out: Option<&Path>) -> Result<String> {
    let profile = read_profile(input)?;

    let result = predictor
        .predict(&profile)
        .with_context(|| format!("Prediction failed for {}", input.display()))?;

    let json = render(&result)?;

    if let Some(out) = out {
        write_output(out, &json)?;
        tracing::info!(path = %out.display(), "Prediction written");
    }

    Ok(json)
}
