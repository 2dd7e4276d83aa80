//! slotwatch Chain Clock
//!
//! Maps slot numbers to wall-clock instants and back for a given chain.
//!
//! ## Slot layout
//!
//! ```text
//! genesis                                                     time ──▶
//!    │  slot 0   │  slot 1   │  slot 2   │ ... │  slot n   │
//!    ├───────────┼───────────┼───────────┼─────┼───────────┤
//!    ▲           ▲                             ▲
//!    start(0)    start(1) = genesis + 1 * d    start(n) = genesis + n * d
//! ```
//!
//! Every conversion is pure and returns a typed result. Slot arithmetic is
//! bounds-checked before multiplying so large or hostile slot numbers are
//! rejected instead of wrapping.
//!
//! ## Usage
//!
//! ```ignore
//! use slotwatch_clock::{lookup_chain, SystemClock};
//! use slotwatch_core::Slot;
//!
//! let chain = lookup_chain("mainnet")?;
//! let start = chain.slot_start_time(Slot::new(13_119_734))?;
//! let offset = chain.time_into_slot(Slot::new(13_119_734), observed_at)?;
//! let now_slot = chain.current_slot(&SystemClock::new())?;
//! ```

mod chain;
mod error;
mod registry;
mod system;

pub use chain::Chain;
pub use error::{ClockError, ClockResult};
pub use registry::{ChainConfig, ChainRegistry, HOODI, MAINNET, builtin_chains, lookup_chain};
pub use system::{FixedClock, SystemClock};

// Re-export the Clock trait for convenience
pub use slotwatch_ports::Clock;
