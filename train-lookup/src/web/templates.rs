//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::TrainNumber;
use crate::upstream::TrainQueryResult;

/// Search page with an empty form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Result page: either the raw payload or an error message.
#[derive(Template)]
#[template(path = "output.html")]
pub struct OutputTemplate {
    /// The train number that was looked up, on success
    pub number: Option<String>,
    /// Payload, already escaped for use inside `<pre>`
    pub train_data: Option<String>,
    /// Error message, on failure
    pub error: Option<String>,
}

impl OutputTemplate {
    /// Page showing a successful lookup.
    pub fn success(number: &TrainNumber, result: &TrainQueryResult) -> Self {
        Self {
            number: Some(number.to_string()),
            train_data: Some(escape_text(result.as_str())),
            error: None,
        }
    }

    /// Page showing an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            number: None,
            train_data: None,
            error: Some(message.into()),
        }
    }
}

/// Escape text for an HTML text node.
///
/// Only `&`, `<` and `>` are replaced. Quotes are left as-is so a JSON payload
/// shows up on the page exactly as the upstream sent it.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
