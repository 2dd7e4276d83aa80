//! Error types for the gateway crate

use slotwatch_ports::FetchError;
use thiserror::Error;

/// Largest slice of an error response body kept for context
pub const MAX_ERROR_BODY_BYTES: usize = 4 << 10;

/// Exporter client errors
#[derive(Error, Debug)]
pub enum ExporterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convert infrastructure ExporterError to domain FetchError
impl From<ExporterError> for FetchError {
    fn from(err: ExporterError) -> Self {
        match err {
            ExporterError::Http(e) => FetchError::Transport(e.to_string()),
            ExporterError::Status { status, body } => FetchError::Status { status, body },
            ExporterError::Decode(e) => FetchError::Decode(e.to_string()),
        }
    }
}
