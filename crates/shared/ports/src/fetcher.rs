use async_trait::async_trait;
use slotwatch_core::{Role, Slot, TraceRecord};

use crate::error::{FetchError, FetchResult};

/// Slot range and role filter for a trace request
///
/// Both ends of the range are inclusive. Construction rejects an inverted
/// range and an empty role list, so a query in hand is always sendable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceQuery {
    from: Slot,
    to: Slot,
    roles: Vec<Role>,
}

impl TraceQuery {
    pub fn new(from: Slot, to: Slot, roles: Vec<Role>) -> FetchResult<Self> {
        if from > to {
            return Err(FetchError::InvalidRange { from, to });
        }
        if roles.is_empty() {
            return Err(FetchError::NoRoles);
        }
        Ok(Self { from, to, roles })
    }

    /// Query covering exactly one slot
    pub fn single_slot(slot: Slot, roles: Vec<Role>) -> FetchResult<Self> {
        Self::new(slot, slot, roles)
    }

    pub fn from(&self) -> Slot {
        self.from
    }

    pub fn to(&self) -> Slot {
        self.to
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Number of slots covered by the range
    pub fn slot_count(&self) -> u64 {
        (self.to.as_u64() - self.from.as_u64()).saturating_add(1)
    }
}

/// Port for retrieving validator trace records
///
/// One call is one request/response exchange. Implementations must not
/// retry and must not return partial results: any failure fails the call.
#[async_trait]
pub trait TraceFetcher: Send + Sync {
    async fn fetch_traces(&self, query: &TraceQuery) -> FetchResult<Vec<TraceRecord>>;

    /// Identifier for logging
    fn name(&self) -> &str {
        "TraceFetcher"
    }
}
