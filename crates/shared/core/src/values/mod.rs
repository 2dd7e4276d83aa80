use chrono::{DateTime, Utc};

mod slot;

pub use slot::Slot;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Validator role name as used by the exporter (e.g. "PROPOSER")
pub type Role = String;
