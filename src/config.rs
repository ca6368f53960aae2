//! Configuration module

use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::logging::LogFormat;

pub const DEFAULT_MODEL_PATH: &str = "models/logistic_pipeline.json";
pub const DEFAULT_THRESHOLD_PATH: &str = "models/threshold.json";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8010";

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Serialized pipeline artifact
    pub model_path: PathBuf,

    /// `{"threshold": <float>}` file
    pub threshold_path: PathBuf,

    /// Bind address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Log output (pretty, json)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            model_path: lookup("MODEL_PATH")
                .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string())
                .into(),

            threshold_path: lookup("THRESHOLD_PATH")
                .unwrap_or_else(|| DEFAULT_THRESHOLD_PATH.to_string())
                .into(),

            host: lookup("HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8010),

            log_format: lookup("LOG_FORMAT")
                .and_then(|f| f.parse().ok())
                .unwrap_or_default(),
        }
    }
}

/// Where the dashboard gets its predictions from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardMode {
    /// Artifacts loaded into the dashboard process
    #[default]
    Local,
    /// HTTP client of the prediction API
    Remote,
}

impl FromStr for DashboardMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(DashboardMode::Local),
            "remote" => Ok(DashboardMode::Remote),
            other => Err(format!("unknown dashboard mode '{}' (expected local or remote)", other)),
        }
    }
}

impl fmt::Display for DashboardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardMode::Local => f.write_str("local"),
            DashboardMode::Remote => f.write_str("remote"),
        }
    }
}

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub mode: DashboardMode,

    /// Prediction API used in remote mode
    pub api_base_url: String,

    /// Client-side timeout for API calls
    pub api_timeout_secs: u64,

    /// Artifacts used in local mode
    pub model_path: PathBuf,
    pub threshold_path: PathBuf,

    pub host: IpAddr,
    pub port: u16,

    pub log_format: LogFormat,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let shared = Config::from_lookup(&lookup);

        Self {
            mode: lookup("DASHBOARD_MODE")
                .and_then(|m| m.parse().ok())
                .unwrap_or_default(),

            api_base_url: lookup("API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),

            api_timeout_secs: lookup("API_TIMEOUT_SECS")
                .and_then(|t| t.parse().ok())
                .filter(|t| *t > 0)
                .unwrap_or(10),

            model_path: shared.model_path,
            threshold_path: shared.threshold_path,

            host: lookup("DASHBOARD_HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),

            port: lookup("DASHBOARD_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8501),

            log_format: shared.log_format,
        }
    }
}
