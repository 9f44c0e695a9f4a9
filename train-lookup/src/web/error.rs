//! Errors surfaced to the user as a rendered page.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, warn};

use crate::domain::InvalidTrainNumber;
use crate::upstream::{ErrorCategory, LookupError};

use super::templates::OutputTemplate;

/// Where a train number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// The search form (`POST /submit`)
    Form,
    /// The URL path (`GET /train/:number`)
    Path,
}

impl InputSource {
    /// Validation message for bad input from this source.
    pub fn validation_message(self) -> &'static str {
        match self {
            InputSource::Form => "Train number must be 5 digits",
            InputSource::Path => "Invalid train number in URL",
        }
    }
}

/// Lookup page error.
///
/// Every failure a lookup can hit ends up here and is rendered as the output
/// page with a fixed message. Nothing propagates past the handler.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Input was not a 5-digit train number; no upstream call was made
    #[error("{source}")]
    InvalidNumber {
        input: String,
        from: InputSource,
        source: InvalidTrainNumber,
    },

    /// The upstream lookup failed
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl PageError {
    /// The message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            PageError::InvalidNumber { from, .. } => from.validation_message(),
            PageError::Lookup(e) => e.category().message(),
        }
    }

    /// The HTTP status the page is served with.
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::InvalidNumber { .. } => StatusCode::BAD_REQUEST,
            PageError::Lookup(e) => match e.category() {
                ErrorCategory::NotFound => StatusCode::NOT_FOUND,
                ErrorCategory::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            },
        }
    }

    fn log(&self) {
        match self {
            PageError::InvalidNumber { input, from, source } => {
                warn!(input = %input, from = ?from, reason = source.reason(), "rejected train number");
            }
            PageError::Lookup(e) => match e.category() {
                ErrorCategory::ConnectionFailure | ErrorCategory::Unknown => {
                    error!(error = %e, status = ?e.upstream_status(), "train lookup failed");
                }
                _ => {
                    warn!(error = %e, status = ?e.upstream_status(), "train lookup failed");
                }
            },
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.log();

        let page = OutputTemplate::failure(self.message());
        let html = page
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e));

        (self.status(), Html(html)).into_response()
    }
}
