//! Error type shared by configuration, argument normalization and API calls

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced to the CLI error boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key from `--api-key`, `AGENTMAIL_API_KEY` or the config file
    #[error(
        "API key required. Use --api-key <key> or set AGENTMAIL_API_KEY environment variable. \
         Get your API key from https://agentmail.to"
    )]
    MissingApiKey,

    /// A list flag started with `[` but was not a JSON array of strings
    #[error("Invalid JSON array: {value}")]
    InvalidListValue {
        value: String,
        source: serde_json::Error,
    },

    /// The service answered with a non-2xx status
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// Connection, TLS or timeout failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response whose body was not JSON
    #[error("Failed to decode response body: {source}")]
    Decode { source: serde_json::Error },

    /// Invalid client configuration (e.g. malformed base URL)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status code, when the error came from a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response body, when the service sent one
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Build a status error from the raw response body.
    ///
    /// The human-readable message prefers the body's `message` field, then
    /// `error`, then a generic description of the status.
    pub(crate) fn from_response(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
        };

        let message = body
            .as_ref()
            .and_then(|b| {
                b.get("message")
                    .or_else(|| b.get("error"))
                    .and_then(Value::as_str)
            })
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status code {status}"));

        Self::Status {
            status,
            message,
            body,
        }
    }
}
