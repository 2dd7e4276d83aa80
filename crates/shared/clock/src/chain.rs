use chrono::Duration;
use slotwatch_core::{Slot, Timestamp};
use slotwatch_ports::Clock;

use crate::error::{ClockError, ClockResult};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Largest slot accepted before looking at the slot duration
const SIGNED_SLOT_LIMIT: Slot = Slot::new(i64::MAX as u64);

/// A deployment of a slot-based chain: genesis instant plus a fixed slot length
///
/// Immutable once built; share it by reference or clone it freely.
/// All conversions are pure functions of the chain and their arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    name: String,
    genesis_time: Timestamp,
    slot_duration: Duration,
    /// Slot duration in the smallest unit of `Timestamp`; always > 0
    slot_duration_nanos: i64,
}

impl Chain {
    /// Create a chain configuration
    ///
    /// Fails with `InvalidChainConfig` unless the slot duration is positive
    /// and expressible in nanoseconds.
    pub fn new(
        name: impl Into<String>,
        genesis_time: Timestamp,
        slot_duration: Duration,
    ) -> ClockResult<Self> {
        let name = name.into();
        let invalid = |reason: &str| ClockError::InvalidChainConfig {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if slot_duration <= Duration::zero() {
            return Err(invalid("slot duration must be positive"));
        }
        let slot_duration_nanos = slot_duration
            .num_nanoseconds()
            .ok_or_else(|| invalid("slot duration does not fit in nanoseconds"))?;

        Ok(Self {
            name,
            genesis_time,
            slot_duration,
            slot_duration_nanos,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn genesis_time(&self) -> Timestamp {
        self.genesis_time
    }

    pub fn slot_duration(&self) -> Duration {
        self.slot_duration
    }

    /// Highest slot whose start time can be computed without overflow
    ///
    /// `floor(i64::MAX / slot_duration_nanos)`, integer division.
    pub fn max_slot(&self) -> Slot {
        Slot::new((i64::MAX / self.slot_duration_nanos) as u64)
    }

    /// Instant at which `slot` begins: `genesis + slot * slot_duration`
    pub fn slot_start_time(&self, slot: Slot) -> ClockResult<Timestamp> {
        let slot_number = i64::try_from(slot.as_u64()).map_err(|_| ClockError::SlotOutOfRange {
            slot,
            max: SIGNED_SLOT_LIMIT,
        })?;

        let max = self.max_slot();
        if slot > max {
            return Err(ClockError::SlotOutOfRange { slot, max });
        }

        // Cannot overflow: slot_number <= i64::MAX / slot_duration_nanos
        let since_genesis = Duration::nanoseconds(slot_number * self.slot_duration_nanos);
        self.genesis_time
            .checked_add_signed(since_genesis)
            .ok_or(ClockError::SlotOutOfRange { slot, max })
    }

    /// Instant at which `slot` ends, i.e. the start of the next slot
    pub fn slot_end_time(&self, slot: Slot) -> ClockResult<Timestamp> {
        let next = slot.next().ok_or(ClockError::SlotOutOfRange {
            slot,
            max: SIGNED_SLOT_LIMIT,
        })?;
        self.slot_start_time(next)
    }

    /// Slot whose window contains `time`
    ///
    /// `floor((time - genesis) / slot_duration)`. Undefined before genesis.
    /// A quotient that does not fit in `Slot` is reported as `SlotOutOfRange`
    /// with the slot saturated to `Slot::MAX`.
    pub fn estimated_slot_at_time(&self, time: Timestamp) -> ClockResult<Slot> {
        if time < self.genesis_time {
            return Err(ClockError::TimeBeforeGenesis {
                time,
                genesis: self.genesis_time,
            });
        }

        // i128 so that any representable timestamp can be measured in nanos
        let elapsed = time - self.genesis_time;
        let elapsed_nanos = i128::from(elapsed.num_seconds()) * NANOS_PER_SECOND
            + i128::from(elapsed.subsec_nanos());
        let slot = elapsed_nanos / i128::from(self.slot_duration_nanos);

        u64::try_from(slot)
            .map(Slot::new)
            .map_err(|_| ClockError::SlotOutOfRange {
                slot: Slot::MAX,
                max: self.max_slot(),
            })
    }

    /// Signed offset of `time` from the start of `target_slot`
    ///
    /// Negative when `time` precedes the slot start. Errors only come from
    /// `slot_start_time`.
    pub fn time_into_slot(&self, target_slot: Slot, time: Timestamp) -> ClockResult<Duration> {
        let start = self.slot_start_time(target_slot)?;
        Ok(time - start)
    }

    /// Slot containing the current time of `clock`
    pub fn current_slot(&self, clock: &dyn Clock) -> ClockResult<Slot> {
        self.estimated_slot_at_time(clock.now())
    }
}
