use slotwatch_core::{Slot, Timestamp};
use thiserror::Error;

/// Errors from slot/time conversion and chain resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Slot {slot} is out of range (max allowed slot is {max})")]
    SlotOutOfRange { slot: Slot, max: Slot },

    #[error("Time {time} is before genesis time {genesis}")]
    TimeBeforeGenesis { time: Timestamp, genesis: Timestamp },

    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("Invalid config for chain {name}: {reason}")]
    InvalidChainConfig { name: String, reason: String },
}

pub type ClockResult<T> = std::result::Result<T, ClockError>;
