//! Dashboard
//!
//! Small HTML form over the inference function. Two backends:
//! - `Local`: artifacts loaded into this process
//! - `Remote`: JSON client of the prediction API
//!
//! Backend failures are rendered inline; the dashboard process never
//! goes down because the API is unreachable.

pub mod client;
pub mod page;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{rejection::RawFormRejection, FromRequest, RawForm, State},
    http::{header, Request},
    response::Html,
    routing::get,
    Form, Router,
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;

use crate::inference::Predictor;
use crate::models::{CustomerProfile, PredictionResult};
use client::ApiClient;
use page::{Outcome, PageView};

pub enum Backend {
    Local(Predictor),
    Remote(ApiClient),
}

impl Backend {
    pub fn describe(&self) -> String {
        match self {
            Backend::Local(predictor) => format!("{} (in-process)", predictor.model_name()),
            Backend::Remote(client) => format!("API at {}", client.base_url()),
        }
    }

    pub async fn threshold(&self) -> Result<f64, String> {
        match self {
            Backend::Local(predictor) => Ok(predictor.threshold()),
            Backend::Remote(client) => client
                .health()
                .await
                .map(|health| health.threshold)
                .map_err(|e| e.to_string()),
        }
    }

    pub async fn predict(&self, profile: &CustomerProfile) -> Result<PredictionResult, String> {
        match self {
            Backend::Local(predictor) => predictor.predict(profile).map_err(|e| e.to_string()),
            Backend::Remote(client) => client.predict(profile).await.map_err(|e| e.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct DashboardState {
    backend: Arc<Backend>,
}

impl DashboardState {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}

pub fn create_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn show_form(State(state): State<DashboardState>) -> Html<String> {
    let profile = page::default_profile();
    let source = state.backend.describe();
    let threshold = state.backend.threshold().await;

    Html(page::render(&PageView {
        profile: &profile,
        source: &source,
        threshold,
        submitted: None,
        outcome: None,
    }))
}

async fn submit(
    State(state): State<DashboardState>,
    form: Result<RawForm, RawFormRejection>,
) -> Html<String> {
    let source = state.backend.describe();

    let raw = match form {
        Ok(RawForm(raw)) => raw,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Dashboard form rejected");
            let profile = page::default_profile();
            return Html(page::render(&PageView {
                profile: &profile,
                source: &source,
                threshold: state.backend.threshold().await,
                submitted: None,
                outcome: Some(Outcome::Error(rejection.body_text())),
            }));
        }
    };

    match parse_form::<CustomerProfile>(&raw).await {
        Ok(profile) => {
            // Concurrent, so an unresponsive API costs one timeout
            let (threshold, prediction) =
                tokio::join!(state.backend.threshold(), state.backend.predict(&profile));

            let (threshold, outcome) = match prediction {
                Ok(result) => (Ok(result.threshold), Outcome::Prediction(result)),
                Err(e) => {
                    tracing::warn!(error = %e, "Dashboard prediction failed");
                    (threshold, Outcome::Error(e))
                }
            };

            Html(page::render(&PageView {
                profile: &profile,
                source: &source,
                threshold,
                submitted: None,
                outcome: Some(outcome),
            }))
        }
        Err(message) => {
            tracing::warn!(error = %message, "Dashboard form rejected");
            let fields = parse_form::<HashMap<String, String>>(&raw).await.ok();
            let profile = page::default_profile();

            Html(page::render(&PageView {
                profile: &profile,
                source: &source,
                threshold: state.backend.threshold().await,
                submitted: fields.as_ref(),
                outcome: Some(Outcome::Error(message)),
            }))
        }
    }
}

/// Decode a urlencoded body with the same rules as the `Form` extractor
async fn parse_form<T: DeserializeOwned>(raw: &Bytes) -> Result<T, String> {
    let request = Request::post("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(raw.clone()))
        .map_err(|e| e.to_string())?;

    Form::<T>::from_request(request, &())
        .await
        .map(|Form(value)| value)
        .map_err(|rejection| rejection.body_text())
}
