use chrono::{Duration, Utc};
use slotwatch_core::Timestamp;
use slotwatch_ports::Clock;

/// Wall-clock time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

/// Clock frozen at a given instant
///
/// Only moves when explicitly advanced. Used for deterministic runs
/// ("what was the slot at ...") and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    time: Timestamp,
}

impl FixedClock {
    pub fn new(time: Timestamp) -> Self {
        Self { time }
    }

    /// Move the frozen time forward (or backward for a negative duration)
    ///
    /// Returns the new time, or `None` with the clock unchanged when the
    /// result is not representable.
    pub fn advance(&mut self, duration: Duration) -> Option<Timestamp> {
        self.time = self.time.checked_add_signed(duration)?;
        Some(self.time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.time
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
