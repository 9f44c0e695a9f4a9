//! HTTP route handlers.

use std::path::Path as FsPath;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Router,
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::info;

use crate::domain::TrainNumber;

use super::dto::SubmitForm;
use super::error::{InputSource, PageError};
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/submit", post(submit))
        .route("/train/:number", get(train_by_number))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Look up the train number submitted through the search form.
///
/// The body is parsed by hand so that an unreadable body still renders the
/// validation page rather than an extractor rejection.
async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Html<String>, PageError> {
    let input = SubmitForm::from_body(&headers, &body)
        .number
        .unwrap_or_default();
    lookup_page(&state, &input, InputSource::Form).await
}

/// Look up the train number given in the URL path.
async fn train_by_number(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Html<String>, PageError> {
    lookup_page(&state, &number, InputSource::Path).await
}

/// Validate, query upstream once, and render the result page.
async fn lookup_page(
    state: &AppState,
    input: &str,
    from: InputSource,
) -> Result<Html<String>, PageError> {
    let number = TrainNumber::parse(input).map_err(|source| PageError::InvalidNumber {
        input: input.to_string(),
        from,
        source,
    })?;

    info!(%number, from = ?from, "searching for train");

    let result = state.api.lookup(&number).await?;

    let html = OutputTemplate::success(&number, &result)
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e));

    Ok(Html(html))
}
