//! Upstream lookup error types.

use std::fmt;

/// Errors from the train lookup HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The API has no train with this number (HTTP 404)
    #[error("train not found")]
    NotFound,

    /// Rate limited by the API (HTTP 429)
    #[error("rate limited by train API")]
    RateLimited,

    /// Credentials rejected (HTTP 401 or 403)
    #[error("access denied by train API (status {status})")]
    AuthDenied { status: u16 },

    /// Could not reach the API host (refused, unreachable, DNS failure)
    #[error("connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Successful status but no usable body
    #[error("empty response body")]
    EmptyResponse,

    /// API returned some other non-success status
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Any other HTTP failure (timeout, body read, redirect loop, ...)
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Client could not be built from its configuration
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            LookupError::Connection(err)
        } else {
            LookupError::Http(err)
        }
    }
}

impl LookupError {
    /// Collapse the error into the category shown to users.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::NotFound => ErrorCategory::NotFound,
            LookupError::RateLimited => ErrorCategory::RateLimited,
            LookupError::AuthDenied { .. } => ErrorCategory::AuthDenied,
            LookupError::Connection(_) => ErrorCategory::ConnectionFailure,
            LookupError::EmptyResponse => ErrorCategory::EmptyResponse,
            LookupError::Api { .. } | LookupError::Http(_) | LookupError::InvalidConfig(_) => {
                ErrorCategory::Unknown
            }
        }
    }

    /// The HTTP status the upstream answered with, if it answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            LookupError::NotFound => Some(404),
            LookupError::RateLimited => Some(429),
            LookupError::AuthDenied { status } | LookupError::Api { status, .. } => Some(*status),
            LookupError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// User-facing failure categories for an upstream lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    RateLimited,
    AuthDenied,
    ConnectionFailure,
    EmptyResponse,
    Unknown,
}

impl ErrorCategory {
    /// The fixed message rendered for this category.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "Train not found. Please check the train number.",
            ErrorCategory::RateLimited => "Too many requests. Please try again later.",
            ErrorCategory::AuthDenied => "API access denied. Please check the API key.",
            ErrorCategory::ConnectionFailure => {
                "Unable to connect to the train service. Please try again later."
            }
            ErrorCategory::EmptyResponse => "No data received from API.",
            ErrorCategory::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
