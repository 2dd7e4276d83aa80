use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Slot number of a slot-based chain
///
/// Slot `n` is the window of one slot duration starting at
/// `genesis + n * slot_duration`. Slots never go negative.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Slot(u64);

impl Slot {
    pub const ZERO: Slot = Slot(0);
    pub const MAX: Slot = Slot(u64::MAX);

    pub const fn new(slot: u64) -> Self {
        Slot(slot)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The following slot, or None at `u64::MAX`
    pub fn next(self) -> Option<Slot> {
        self.0.checked_add(1).map(Slot)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Slot {
    fn from(slot: u64) -> Self {
        Slot(slot)
    }
}

impl From<Slot> for u64 {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

impl FromStr for Slot {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Slot)
    }
}
