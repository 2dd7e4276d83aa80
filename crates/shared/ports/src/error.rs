use slotwatch_core::Slot;
use thiserror::Error;

/// Domain-level errors for fetching trace records
///
/// Infrastructure errors (HTTP client, JSON decoder) are converted into
/// these so callers do not depend on the transport in use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid slot range: from {from} is after to {to}")]
    InvalidRange { from: Slot, to: Slot },

    #[error("No roles requested")]
    NoRoles,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;
