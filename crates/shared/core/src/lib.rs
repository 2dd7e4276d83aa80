//! slotwatch Core Domain
//!
//! Pure domain types shared by every slotwatch crate.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Commit, ConsensusRound, PrePostMessage, Prepare, Proposal, RoundChange, RoundMessage,
    TraceRecord,
};
pub use values::{Role, Slot, Timestamp};
