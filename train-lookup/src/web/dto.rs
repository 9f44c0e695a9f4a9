//! Data transfer objects for web requests.

use axum::http::{HeaderMap, header};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Body of `POST /submit`.
///
/// Accepts `application/x-www-form-urlencoded` and `application/json` bodies.
/// `number` is `None` whenever the body does not carry exactly one usable
/// value, so that every malformed submission renders the validation message.
#[derive(Debug, PartialEq, Eq)]
pub struct SubmitForm {
    /// Train number as typed by the user
    pub number: Option<String>,
}

#[derive(Deserialize)]
struct JsonSubmit {
    number: Option<Value>,
}

impl SubmitForm {
    /// Extract the submitted number from a request body.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Self {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        let number = if content_type.starts_with("application/x-www-form-urlencoded") {
            from_form(body)
        } else if content_type.starts_with("application/json") {
            from_json(body)
        } else {
            debug!(content_type, "unsupported submit body");
            None
        };

        Self { number }
    }
}

fn from_form(body: &[u8]) -> Option<String> {
    let mut values = form_urlencoded::parse(body)
        .filter(|(key, _)| key == "number")
        .map(|(_, value)| value.into_owned());

    let first = values.next()?;
    if values.next().is_some() {
        debug!("repeated number field in submit body");
        return None;
    }
    Some(first)
}

fn from_json(body: &[u8]) -> Option<String> {
    let parsed: JsonSubmit = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(error = %e, body = %String::from_utf8_lossy(body), "invalid JSON submit body");
            return None;
        }
    };

    // A bare JSON number like 12345 reads the same as "12345"
    match parsed.number? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
