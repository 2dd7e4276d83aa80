//! Wire message types for the exporter API
//!
//! JSON shapes of the `/v1/exporter/traces/validator` endpoint. Trace
//! records themselves are domain entities and live in `slotwatch-core`.

pub mod traces;

pub use traces::{TraceRequest, TraceResponse};
