//! Shared helpers for integration tests
#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use churn_predictor::{Artifacts, Predictor};

pub fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

pub fn sample_model() -> PathBuf {
    repo_path("models/logistic_pipeline.json")
}

pub fn sample_threshold() -> PathBuf {
    repo_path("models/threshold.json")
}

/// Predictor over the artifacts shipped in `models/`
pub fn sample_predictor() -> Predictor {
    Artifacts::load(sample_model(), sample_threshold())
        .expect("sample artifacts load")
        .into_predictor()
}

/// `samples/customer.json` (high churn risk)
pub fn churn_profile_json() -> String {
    std::fs::read_to_string(repo_path("samples/customer.json")).unwrap()
}

/// `samples/loyal_customer.json` (low churn risk)
pub fn loyal_profile_json() -> String {
    std::fs::read_to_string(repo_path("samples/loyal_customer.json")).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Serve `router` on an ephemeral local port
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// URL-encode a flat JSON object as a form body
pub fn form_body(json: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    value
        .as_object()
        .unwrap()
        .iter()
        .map(|(key, value)| {
            let raw = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{}={}", key, encode(&raw))
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(raw: &str) -> String {
    raw.replace(' ', "+").replace('(', "%28").replace(')', "%29")
}
