//! HTTP exchange with the Close REST API.
//!
//! Each call builds one request, sends it, and either returns the decoded JSON body or fails.
//! Nothing is cached, retried or shared between calls.

use crate::request::ApiRequest;
use base64::Engine as _;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Production base URL of the Close REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.close.com/api/v1";

#[derive(Debug, Error)]
pub enum CloseError {
    #[error("{0}")]
    Validation(String),
    #[error("Close.com API error: {status} {status_text} - {body}")]
    Api {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("http transport error: {0}")]
    Transport(String),
    #[error("invalid JSON in response: {0}")]
    Decode(String),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CloseError>;

impl From<reqwest::Error> for CloseError {
    fn from(value: reqwest::Error) -> Self {
        // Drop the URL: it carries query filters which may include customer data.
        Self::Transport(value.without_url().to_string())
    }
}

/// `Authorization` header value for an API key: `Basic base64("{key}:")`.
#[must_use]
pub fn basic_auth_value(api_key: &str) -> String {
    let token = base64::engine::general_purpose::STANDARD.encode(format!("{api_key}:"));
    format!("Basic {token}")
}

/// Stateless client for the Close REST API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct CloseClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for CloseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloseClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl CloseClient {
    /// Build a client against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CloseError::Config`] if the API key is blank or the base URL is not an
    /// absolute `http(s)` URL.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CloseError::Config("API key must not be empty".to_string()));
        }

        let base_url = base_url.into();
        let parsed = Url::parse(&base_url)
            .map_err(|e| CloseError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CloseError::Config(format!(
                "Invalid base URL '{base_url}': unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: timeout.filter(|t| !t.is_zero()),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `request` and decode the response body.
    ///
    /// An empty success body (e.g. after `DELETE`) yields `Value::Null`.
    ///
    /// # Errors
    ///
    /// - [`CloseError::Api`] for a non-2xx status (status, reason and raw body text)
    /// - [`CloseError::Transport`] when the request could not be completed
    /// - [`CloseError::Decode`] when a success body is not JSON
    pub async fn execute(&self, request: &ApiRequest) -> Result<Value> {
        let url = request.url(&self.base_url)?;
        debug!(method = %request.method, path = %request.path, "close api request");

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, basic_auth_value(&self.api_key));
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(CloseError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| CloseError::Decode(e.to_string()))
    }

    /// Call `/me/`; any failure is logged and reported as `false`.
    pub async fn test_connection(&self) -> bool {
        match self.execute(&ApiRequest::me()).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "failed to connect to Close.com API");
                false
            }
        }
    }
}
