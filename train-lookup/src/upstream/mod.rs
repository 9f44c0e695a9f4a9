//! Client for the third-party train lookup API.
//!
//! The upstream service is a RapidAPI-hosted REST endpoint. Each lookup is a
//! single `GET {base}/{number}?isH5=true&client=web` authenticated with the
//! `X-RapidAPI-Key` and `X-RapidAPI-Host` headers. The response body is treated
//! as opaque and passed through verbatim.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;

pub use client::{
    DEFAULT_API_HOST, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TrainApiClient, TrainApiConfig,
    TrainQueryResult,
};
pub use error::{ErrorCategory, LookupError};
