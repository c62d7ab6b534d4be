//! Errors that abort a content load.
//!
//! Everything else (unknown sections, incomplete buttons, missing fields) is
//! absorbed by normalization and counted in [`crate::RenderReport`].

use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a usable `home.json`.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The request never produced a response (DNS, refused, CORS, bad URL).
    #[error("network error: {0}")]
    Transport(String),

    /// The body is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A local content file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::Status(status.as_u16()),
            None => LoadError::Transport(err.to_string()),
        }
    }
}

impl LoadError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Status(code) => Some(*code),
            _ => None,
        }
    }
}
