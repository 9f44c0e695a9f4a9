//! Train lookup HTTP client.
//!
//! Provides a single async lookup against the upstream REST API. Handles
//! authentication headers and classification of failures; the response body
//! itself is never interpreted.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, trace, warn};

use crate::domain::TrainNumber;

use super::error::LookupError;

/// Default base URL for the train search API.
pub const DEFAULT_BASE_URL: &str =
    "https://indian-railway-irctc.p.rapidapi.com/api/trains-search/v1/train";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default RapidAPI host identifier.
pub const DEFAULT_API_HOST: &str = "indian-railway-irctc.p.rapidapi.com";

/// Fixed query parameters sent with every lookup.
const LOOKUP_QUERY: [(&str, &str); 2] = [("isH5", "true"), ("client", "web")];

/// How much of an error body to keep for logs.
const ERROR_BODY_PREVIEW: usize = 500;

/// Configuration for the train API client.
#[derive(Clone)]
pub struct TrainApiConfig {
    /// RapidAPI key sent as `X-RapidAPI-Key`
    pub api_key: String,
    /// Host identifier sent as `X-RapidAPI-Host`
    pub api_host: String,
    /// Base URL; the train number is appended as the last path segment
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TrainApiConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: DEFAULT_API_HOST.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the `X-RapidAPI-Host` value.
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for TrainApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainApiConfig")
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Raw payload returned by a successful lookup.
///
/// Holds the response body exactly as received. It is expected to be JSON but
/// is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainQueryResult(String);

impl TrainQueryResult {
    /// Returns the body as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Train lookup API client.
#[derive(Debug, Clone)]
pub struct TrainApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl TrainApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TrainApiConfig) -> Result<Self, LookupError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| LookupError::InvalidConfig("invalid API key format".to_string()))?;
        headers.insert(HeaderName::from_static("x-rapidapi-key"), api_key);

        let api_host = HeaderValue::from_str(&config.api_host)
            .map_err(|_| LookupError::InvalidConfig("invalid API host format".to_string()))?;
        headers.insert(HeaderName::from_static("x-rapidapi-host"), api_host);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LookupError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL lookups are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a train by number.
    ///
    /// Issues exactly one request and never retries. Status codes the UI
    /// distinguishes (404, 429, 401/403) get their own error variants; every
    /// other non-success status becomes [`LookupError::Api`].
    pub async fn lookup(&self, number: &TrainNumber) -> Result<TrainQueryResult, LookupError> {
        let url = format!("{}/{}", self.base_url, number);
        debug!(%url, "querying train API");

        let response = self.http.get(&url).query(&LOOKUP_QUERY).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "train API responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            warn!(status = status.as_u16(), body = %preview, "train API returned an error status");

            return Err(match status {
                StatusCode::NOT_FOUND => LookupError::NotFound,
                StatusCode::TOO_MANY_REQUESTS => LookupError::RateLimited,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LookupError::AuthDenied {
                    status: status.as_u16(),
                },
                _ => LookupError::Api {
                    status: status.as_u16(),
                    body: preview,
                },
            });
        }

        let body = response.text().await?;
        trace!(%body, "train API response body");

        // A JSON `null` carries no data either
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(LookupError::EmptyResponse);
        }

        debug!(bytes = body.len(), "train API returned data");
        Ok(TrainQueryResult(body))
    }
}
