//! JSON output on stdout, JSON errors on stderr

use agentmail_core::ApiError;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// Error payload written to stderr
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl ErrorReport {
    /// Build the payload, pulling status and body out of an [`ApiError`]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ApiError>() {
            Some(api_err) => Self {
                error: api_err.to_string(),
                status_code: api_err.status_code(),
                details: api_err.body().cloned(),
            },
            None => Self {
                error: format!("{err:#}"),
                status_code: None,
                details: None,
            },
        }
    }
}

/// Print a successful result as pretty JSON
pub fn emit(data: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print an error payload as pretty JSON on stderr.
///
/// The caller is responsible for exiting with a non-zero status.
pub fn emit_error(err: &anyhow::Error) {
    let report = ErrorReport::from_error(err);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("Error: {err:#}"),
    }
}
