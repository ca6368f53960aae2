//! Churn Predictor API Server
//!
//! ```text
//!   POST /predict ──► Json<CustomerProfile> ──► Predictor ──► PredictionResult
//!   GET  /health  ──► {"status": "ok", "threshold": ...}
//! ```
//!
//! The model artifact is loaded before the listener binds. A missing or
//! unreadable artifact stops the process.

use std::net::SocketAddr;

use anyhow::Context;
use churn_predictor::{app, logging, AppState, Artifacts, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    logging::init("churn_predictor=debug,churn_api=debug,tower_http=debug", config.log_format);

    tracing::info!("Churn Predictor API starting...");

    let artifacts = Artifacts::load(&config.model_path, &config.threshold_path).map_err(|e| {
        tracing::error!("Cannot serve without a model: {}", e);
        e
    })?;

    let predictor = artifacts.into_predictor();
    tracing::info!(
        model = predictor.model_name(),
        threshold = predictor.threshold(),
        "Predictor ready"
    );

    let app = app::create_router(AppState::new(predictor));

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(app::shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
