//! Binary integration tests: batch CLI and API startup

mod common;

use std::process::Command;

use churn_predictor::PredictionResult;
use common::*;

fn predict_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_predict"));
    cmd.arg("--model")
        .arg(sample_model())
        .arg("--threshold")
        .arg(sample_threshold())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_and_writes_same_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("reports").join("result.json");

    let output = predict_cmd()
        .arg("--input")
        .arg(repo_path("samples/customer.json"))
        .arg("--out")
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(stdout.trim_end(), written);

    let result: PredictionResult = serde_json::from_str(&written).unwrap();
    assert_eq!(result.threshold, 0.5);
    assert_eq!(result.churn_pred, 1);
    assert!(written.contains("\n  \"prob_churn\""));
}

#[test]
fn test_accepts_bom_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("customer.json");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(loyal_profile_json().as_bytes());
    std::fs::write(&input, bytes).unwrap();

    let output = predict_cmd().arg("-i").arg(&input).output().unwrap();
    assert!(output.status.success());

    let result: PredictionResult = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result.churn_pred, 0);
}

#[test]
fn test_invalid_profile_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("customer.json");
    std::fs::write(&input, churn_profile_json().replace("\"tenure\": 2", "\"tenure\": -2")).unwrap();

    let output = predict_cmd().arg("-i").arg(&input).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("tenure must be >= 0"));
}

#[test]
fn test_missing_model_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_predict"))
        .arg("-i")
        .arg(repo_path("samples/customer.json"))
        .arg("--model")
        .arg(dir.path().join("nope.json"))
        .arg("--threshold")
        .arg(sample_threshold())
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_api_exits_without_model() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_churn-api"))
        .env("MODEL_PATH", dir.path().join("logistic_pipeline.json"))
        .env("THRESHOLD_PATH", sample_threshold())
        .env("HOST", "127.0.0.1")
        .env("PORT", "0")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Model not found"), "stderr: {}", stderr);
    assert!(!stderr.contains("Server listening"));
}
