//! Prediction API Client
//!
//! HTTP client the dashboard uses in remote mode.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{CustomerProfile, ErrorResponse, HealthResponse, PredictionResult};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to create HTTP client: {0}")]
    Build(String),

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Could not reach {url}: {message}")]
    Network { url: String, message: String },

    #[error("API returned {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Unexpected response from API: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check server health
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        decode(response).await
    }

    /// Post one profile to `/predict`
    pub async fn predict(&self, profile: &CustomerProfile) -> Result<PredictionResult, ClientError> {
        let url = format!("{}/predict", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(profile)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        decode(response).await
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout { url: url.to_string() }
    } else {
        ClientError::Network {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()));
    }

    // Prefer the API's `detail`, fall back to the raw body
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.detail)
        .unwrap_or(body);

    Err(ClientError::Status {
        status: status.as_u16(),
        detail,
    })
}
