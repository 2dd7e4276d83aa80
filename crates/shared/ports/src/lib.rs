//! slotwatch Ports
//!
//! Port definitions (traits) for slotwatch.
//! These define the boundaries between domain logic and infrastructure.

mod clock;
mod error;
mod fetcher;

pub use clock::Clock;
pub use error::{FetchError, FetchResult};
pub use fetcher::{TraceFetcher, TraceQuery};
