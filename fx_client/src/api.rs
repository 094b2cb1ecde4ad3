//! HTTP client for the rates API.
//!
//! Three read-only endpoints are exposed through the [`RatesApi`] trait:
//! `GET /quotes`, `GET /average` and `GET /slippage`. Every failure is surfaced as an
//! [`FxError`], never as an empty or default value:
//!
//! - no response at all → `FxError::Transport`;
//! - non-success status → `FxError::Http`, carrying the `message` field of the JSON
//!   error body when one can be read;
//! - success status with an undecodable body → `FxError::Malformed`.
use std::time::Duration;

use fx_common::model::{Average, Quote, Slippage};
use fx_common::{FxError, Result};
use log::{debug, error};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Read operations of the rates API.
pub trait RatesApi: Send + Sync {
    /// Latest quote of every provider.
    fn get_quotes(&self) -> Result<Vec<Quote>>;
    /// Current market average.
    fn get_average(&self) -> Result<Average>;
    /// Slippage of every provider against the average.
    fn get_slippage(&self) -> Result<Vec<Slippage>>;
}

/// Optional error body returned with a non-success status.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Blocking [`RatesApi`] implementation bound to a base URL.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` (no trailing slash) with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FxError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL all endpoints are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let result = self.request(&url);
        if let Err(e) = &result {
            error!("Error fetching {}: {}", endpoint, e);
        }
        result
    }

    fn request<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FxError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| FxError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .unwrap_or_default()
                .message;
            return Err(FxError::Http {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| FxError::Malformed(e.to_string()))
    }
}

impl RatesApi for ApiClient {
    fn get_quotes(&self) -> Result<Vec<Quote>> {
        self.fetch("/quotes")
    }

    fn get_average(&self) -> Result<Average> {
        self.fetch("/average")
    }

    fn get_slippage(&self) -> Result<Vec<Slippage>> {
        self.fetch("/slippage")
    }
}
