use chrono::{DateTime, Utc};
use slotwatch_core::Timestamp;

use crate::error::{ReportError, ReportResult};

/// Parse an exporter RFC 3339 timestamp into UTC
pub fn parse_timestamp(value: &str) -> ReportResult<Timestamp> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| ReportError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
