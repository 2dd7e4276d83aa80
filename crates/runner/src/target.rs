use slotwatch_clock::{Chain, ClockResult};
use slotwatch_core::{Slot, Timestamp};
use slotwatch_ports::Clock;

/// How the run's target slot is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSlot {
    /// Explicit slot number
    Slot(Slot),
    /// Slot containing the given instant
    At(Timestamp),
    /// Slot containing the clock's current time
    Current,
}

impl TargetSlot {
    pub fn from_args(slot: Option<u64>, at: Option<Timestamp>) -> Self {
        match (slot, at) {
            (Some(slot), _) => TargetSlot::Slot(Slot::new(slot)),
            (None, Some(at)) => TargetSlot::At(at),
            (None, None) => TargetSlot::Current,
        }
    }

    pub fn resolve(&self, chain: &Chain, clock: &dyn Clock) -> ClockResult<Slot> {
        match self {
            TargetSlot::Slot(slot) => Ok(*slot),
            TargetSlot::At(time) => chain.estimated_slot_at_time(*time),
            TargetSlot::Current => chain.current_slot(clock),
        }
    }
}
