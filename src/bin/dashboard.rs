//! Churn Predictor Dashboard
//!
//! `local` mode loads the artifacts into this process; `remote` mode posts
//! to the prediction API at `API_BASE_URL`.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use churn_predictor::dashboard::{self, client::ApiClient, Backend, DashboardState};
use churn_predictor::{app, logging, Artifacts, DashboardConfig, DashboardMode};

#[derive(Parser)]
#[command(name = "churn-dashboard")]
#[command(about = "Interactive churn prediction dashboard")]
struct Args {
    /// Prediction backend (local, remote)
    #[arg(long)]
    mode: Option<DashboardMode>,

    /// Prediction API base URL (remote mode)
    #[arg(long)]
    api_base_url: Option<String>,

    /// Listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Load configuration, then apply CLI overrides
    let mut config = DashboardConfig::from_env();
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(url) = args.api_base_url {
        config.api_base_url = url;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    logging::init("churn_predictor=info,churn_dashboard=info,tower_http=info", config.log_format);

    let backend = match config.mode {
        DashboardMode::Local => {
            let artifacts = Artifacts::load(&config.model_path, &config.threshold_path)
                .context("Failed to load model artifacts")?;
            Backend::Local(artifacts.into_predictor())
        }
        DashboardMode::Remote => {
            let timeout = Duration::from_secs(config.api_timeout_secs);
            Backend::Remote(ApiClient::new(&config.api_base_url, timeout)?)
        }
    };

    tracing::info!(mode = %config.mode, source = %backend.describe(), "Dashboard backend ready");

    let router = dashboard::create_router(DashboardState::new(backend));

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(app::shutdown_signal())
        .await
        .context("Dashboard server error")?;

    Ok(())
}
