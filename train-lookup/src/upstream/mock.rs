//! In-process stand-in for the upstream API, used by tests.
//!
//! Serves a fixed status and body, optionally after a delay, for every
//! `GET /api/train/{number}` and records what each request carried.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::{Router, routing::get};
use tokio::net::TcpListener;

/// What a single upstream request carried.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub number: String,
    pub query: Option<String>,
    pub api_key: Option<String>,
    pub api_host: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    delay: Duration,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A running mock upstream.
pub(crate) struct MockUpstream {
    /// Base URL to hand to `TrainApiConfig::with_base_url`.
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockUpstream {
    /// Start a mock that answers every lookup with `status` and `body`.
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        Self::start_delayed(status, body, Duration::ZERO).await
    }

    /// Start a mock that waits `delay` before answering each lookup.
    pub async fn start_delayed(status: StatusCode, body: &'static str, delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body,
            delay,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/api/train/:number", get(answer))
            .with_state(state);

        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api/train"),
            requests,
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

async fn answer(
    State(state): State<MockState>,
    Path(number): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> (StatusCode, &'static str) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        number,
        query,
        api_key: header("x-rapidapi-key"),
        api_host: header("x-rapidapi-host"),
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (state.status, state.body)
}

/// A base URL on a local port nothing is listening on.
pub(crate) async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/train")
}
