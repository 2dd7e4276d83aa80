//! slotwatch Report
//!
//! Converts exporter trace records into per-message offsets from the start
//! of a target slot and prints them.
//!
//! ```text
//! Vec<TraceRecord> ──▶ ReportBuilder ──▶ SlotReport ──▶ render_text
//!                         │
//!                         └── Chain::time_into_slot(target, t) per message
//! ```
//!
//! Every timestamp parse and clock conversion returns a typed error. The
//! builder's `ErrorPolicy` decides whether one bad record aborts the report
//! or is skipped.

mod builder;
mod error;
mod model;
mod render;
mod timestamp;

pub use builder::{ErrorPolicy, ReportBuilder};
pub use error::{ReportError, ReportResult};
pub use model::{MessageOffset, RecordTiming, RoundTiming, SkippedRecord, SlotReport};
pub use render::{render_record, render_text, to_text};
pub use timestamp::parse_timestamp;
