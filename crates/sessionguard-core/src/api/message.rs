//! User-facing message extraction from failed responses.
//!
//! Tried in order: a `message` or `error` field in a JSON body, the raw
//! body text, then a localized default for the status. Nothing here fails;
//! each unreadable tier falls through to the next.

use reqwest::Response;
use serde_json::Value;
use tracing::debug;

use crate::messages;

/// Read the body of `response` and extract a message from it.
/// Returns an empty string when nothing applies.
pub async fn extract_message(response: Response) -> String {
    let status = response.status().as_u16();
    let body = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(status, error = %e, "Failed to read error body");
            Default::default()
        }
    };
    message_from_body(status, &body)
}

pub fn message_from_body(status: u16, body: &[u8]) -> String {
    if let Some(message) = json_message(body) {
        return message;
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    messages::status_default(status).to_string()
}

fn json_message(body: &[u8]) -> Option<String> {
    let data: Value = serde_json::from_slice(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|field| data.get(field).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
