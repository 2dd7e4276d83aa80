//! slotwatch Gateway
//!
//! Gateway to the validator-trace exporter. Provides:
//! - Wire message types for the exporter's JSON API
//! - `ExporterClient`, the HTTP implementation of the `TraceFetcher` port
//!
//! ## Architecture
//!
//! ```text
//!  Exporter service (HTTP/JSON)
//!         │ POST /v1/exporter/traces/validator
//!    ┌────▼──────────┐
//!    │ExporterClient │  ExporterError ──▶ FetchError
//!    └────┬──────────┘
//!         │ Vec<TraceRecord>
//!    ┌────▼────┐
//!    │ Report  │
//!    └─────────┘
//! ```
//!
//! One request per call, bounded by the configured timeout. No retries.

pub mod config;
pub mod error;
pub mod messages;
pub mod rest_client;

// Re-export commonly used types
pub use config::{DEFAULT_TIMEOUT, ExporterConfig};
pub use error::{ExporterError, MAX_ERROR_BODY_BYTES};
pub use messages::{TraceRequest, TraceResponse};
pub use rest_client::{ExporterClient, VALIDATOR_TRACES_PATH};
