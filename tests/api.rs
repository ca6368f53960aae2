//! Prediction API integration tests

mod common;

use axum::http::StatusCode;
use churn_predictor::{create_router, AppState, ArtifactError, Artifacts, PredictionResult};
use common::*;
use tower::ServiceExt;

fn app() -> axum::Router {
    create_router(AppState::new(sample_predictor()))
}

#[tokio::test]
async fn test_health() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({"status": "ok", "threshold": 0.5}));
}

#[tokio::test]
async fn test_predict_churn_customer() {
    let response = app()
        .oneshot(json_request("POST", "/predict", churn_profile_json()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3);

    let result: PredictionResult = serde_json::from_value(body).unwrap();
    assert_eq!(result.threshold, 0.5);
    assert!((result.prob_churn - 0.795_566).abs() < 1e-5, "got {}", result.prob_churn);
    assert_eq!(result.churn_pred, 1);
}

#[tokio::test]
async fn test_predict_loyal_customer() {
    let response = app()
        .oneshot(json_request("POST", "/predict", loyal_profile_json()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let result: PredictionResult = serde_json::from_value(body_json(response).await).unwrap();
    assert!(result.prob_churn < 0.05);
    assert_eq!(result.churn_pred, 0);
}

#[tokio::test]
async fn test_predict_is_deterministic() {
    let app = app();
    let mut seen = Vec::new();

    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/predict", churn_profile_json()))
            .await
            .unwrap();
        seen.push(body_bytes(response).await);
    }

    assert!(seen.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_concurrent_requests_agree() {
    let app = app();
    let mut handles = Vec::new();

    for i in 0..16 {
        let app = app.clone();
        let body = if i % 2 == 0 { churn_profile_json() } else { loyal_profile_json() };
        handles.push(tokio::spawn(async move {
            let response = app.oneshot(json_request("POST", "/predict", body)).await.unwrap();
            let result: PredictionResult = serde_json::from_value(body_json(response).await).unwrap();
            (i, result)
        }));
    }

    for handle in handles {
        let (i, result) = handle.await.unwrap();
        assert_eq!(result.churn_pred, if i % 2 == 0 { 1 } else { 0 });
    }
}

async fn assert_rejected(request: axum::http::Request<axum::body::Body>) -> String {
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    let detail = body["detail"].as_str().unwrap().to_string();
    assert!(!detail.is_empty());
    detail
}

#[tokio::test]
async fn test_malformed_json_is_422() {
    assert_rejected(json_request("POST", "/predict", "{\"gender\": ")).await;
    assert_rejected(json_request("POST", "/predict", "not json at all")).await;
}

#[tokio::test]
async fn test_missing_content_type_is_422() {
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/predict")
        .body(axum::body::Body::from(churn_profile_json()))
        .unwrap();

    assert_rejected(request).await;
}

#[tokio::test]
async fn test_schema_violations_are_422() {
    let bad_enum = churn_profile_json().replace("Fiber optic", "Satellite");
    let detail = assert_rejected(json_request("POST", "/predict", bad_enum)).await;
    assert!(detail.contains("Satellite"));

    let wrong_type = churn_profile_json().replace("\"tenure\": 2", "\"tenure\": \"two\"");
    assert_rejected(json_request("POST", "/predict", wrong_type)).await;

    let missing = churn_profile_json().replace("\"gender\": \"Female\",", "");
    let detail = assert_rejected(json_request("POST", "/predict", missing)).await;
    assert!(detail.contains("gender"));
}

#[tokio::test]
async fn test_non_object_body_is_422() {
    let detail = assert_rejected(json_request("POST", "/predict", "[]")).await;
    assert_eq!(detail, "Customer profile must be a JSON object, found an array");

    let positional = serde_json::json!([
        "Female", 0, "No", "No", 2, "Yes", "No", "Fiber optic", "No", "No",
        "No", "No", "No", "No", "Month-to-month", "Yes", "Electronic check", 85.0, 190.0
    ]);
    let detail = assert_rejected(json_request("POST", "/predict", positional.to_string())).await;
    assert!(detail.contains("must be a JSON object"));
}

#[tokio::test]
async fn test_range_violation_is_422() {
    let negative = churn_profile_json().replace("\"tenure\": 2", "\"tenure\": -4");
    let detail = assert_rejected(json_request("POST", "/predict", negative)).await;
    assert_eq!(detail, "tenure must be >= 0");
}

#[test]
fn test_missing_model_prevents_startup() {
    let dir = tempfile::tempdir().unwrap();
    let result = Artifacts::load(dir.path().join("logistic_pipeline.json"), sample_threshold());
    assert!(matches!(result, Err(ArtifactError::NotFound(_))));
}

#[tokio::test]
async fn test_corrupt_threshold_serves_default() {
    let dir = tempfile::tempdir().unwrap();
    let threshold = dir.path().join("threshold.json");
    std::fs::write(&threshold, "{ threshold: oops").unwrap();

    let predictor = Artifacts::load(sample_model(), &threshold).unwrap().into_predictor();
    let app = create_router(AppState::new(predictor));

    let body = body_json(app.oneshot(get("/health")).await.unwrap()).await;
    assert_eq!(body["threshold"], 0.5);
}

#[tokio::test]
async fn test_custom_threshold_flows_into_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let threshold = dir.path().join("threshold.json");
    std::fs::write(&threshold, r#"{"threshold": 0.85}"#).unwrap();

    let predictor = Artifacts::load(sample_model(), &threshold).unwrap().into_predictor();
    let app = create_router(AppState::new(predictor));

    let response = app
        .oneshot(json_request("POST", "/predict", churn_profile_json()))
        .await
        .unwrap();
    let result: PredictionResult = serde_json::from_value(body_json(response).await).unwrap();

    assert_eq!(result.threshold, 0.85);
    assert_eq!(result.churn_pred, 0);
}

#[tokio::test]
async fn test_unknown_route() {
    let response = app().oneshot(get("/predict/batch")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
