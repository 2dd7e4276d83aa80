use slotwatch_core::Timestamp;

/// Source of "now" for slot resolution
///
/// The chain clock never reads the wall clock itself; anything that needs
/// the current slot asks a `Clock`. `SystemClock` backs the CLI, a frozen
/// clock backs tests and point-in-time queries.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Identifier for logging
    fn name(&self) -> &str {
        "Clock"
    }
}
