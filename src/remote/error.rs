//! Error types for the remote resource client.

use serde_json::Value;
use thiserror::Error;

/// Failures of a call to the remote collection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RemoteError {
    /// The server answered with a non-2xx status.
    ///
    /// `message` is what the body had to say, if anything.
    #[error("Request failed with status code {status}")]
    Status { status: u16, message: Option<String> },

    /// The request never produced a response (connection refused, timeout, ...).
    #[error("{0}")]
    Transport(String),

    /// The response arrived but its body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Builds a status error, extracting a message from the response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        RemoteError::Status {
            status,
            message: extract_message(body),
        }
    }

    /// The text shown to the user.
    ///
    /// Prefers the server's own message, then the transport-level description, and
    /// falls back to `fallback` when neither says anything.
    pub fn user_message(&self, fallback: &str) -> String {
        let message = match self {
            RemoteError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        };
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RemoteError::Decode(e.to_string())
        } else {
            RemoteError::Transport(e.to_string())
        }
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Structured bodies (`{"message": ...}` or `{"error": ...}`) yield that field; other
/// JSON is shown compacted; plain text is shown as is.
fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => ["message", "error"]
            .iter()
            .find_map(|key| match fields.get(*key) {
                Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
                _ => None,
            })
            .or_else(|| Some(Value::Object(fields).to_string())),
        Ok(Value::Null) => None,
        Ok(other) => Some(other.to_string()),
        Err(_) => Some(body.to_string()),
    }
}
