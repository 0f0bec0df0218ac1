//! Document acquisition.
//!
//! Resolves a source identifier (an `http(s)://` URL or a local file path)
//! into a parsed JSON tree. Transport failures and malformed payloads are
//! distinct error kinds; the matcher is never invoked on a failed
//! acquisition.

use serde_json::Value;
use std::fs;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// The endpoint checked when no source argument is given.
pub const DEFAULT_SOURCE: &str =
    "https://api.tmsandbox.co.nz/v1/Categories/6327/Details.json?catalogue=false";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur while acquiring a document.
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// `1-0`: the body was fetched but is not parseable as JSON.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Fetch and decode a document from a URL or file path.
pub fn acquire(source: &str) -> Result<Value, AcquireError> {
    let body = if source.starts_with("http://") || source.starts_with("https://") {
        debug!(source, "fetching document over HTTP");
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        client.get(source).send()?.error_for_status()?.text()?
    } else {
        debug!(source, "reading document from file");
        fs::read_to_string(source).map_err(|e| AcquireError::Read {
            path: source.to_string(),
            source: e,
        })?
    };

    Ok(serde_json::from_str(&body)?)
}
