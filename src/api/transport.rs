use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use std::time::Duration;

use crate::config::AppConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures of a single API request. Never surfaced past `FootballApi`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("offline mode")]
    Offline,

    #[error("invalid API key header: {0}")]
    InvalidKey(#[from] reqwest::header::InvalidHeaderValue),
}

/// Issues GET requests against the football-data API and returns the JSON body.
pub trait Transport: Send + Sync {
    fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError>;
}

/// Blocking HTTP transport with a fixed timeout
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if !config.api_key.is_empty() {
            headers.insert("X-Auth-Token", HeaderValue::from_str(&config.api_key)?);
        }

        let client = Client::builder()
            .user_agent(concat!("liga-analytics/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let text = response.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Transport that never reaches the network; every call degrades to fallback data.
#[derive(Default)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    fn get_json(&self, _path: &str, _query: &[(&str, String)]) -> Result<Value, ApiError> {
        Err(ApiError::Offline)
    }
}
