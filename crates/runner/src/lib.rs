//! slotwatch Runner
//!
//! Command line front end: loads configuration, resolves the chain and the
//! target slot, fetches traces through the `TraceFetcher` port and prints
//! the timing report.
//!
//! ## Flow
//!
//! ```text
//!  CLI args ─┐
//!            ├─▶ plan_report ──▶ ReportPlan { chain, target, query, policy }
//!  config ───┘        │                         │
//!                 ChainRegistry            run_report
//!                 Clock (now)                   │ TraceFetcher::fetch_traces
//!                                               ▼
//!                                   ReportBuilder ──▶ render_text ──▶ stdout
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod target;

pub use app::{ReportPlan, execute, exporter_config, plan_report, run_report, write_chains};
pub use cli::{Cli, Command, ReportArgs};
pub use config::{ConfigError, SlotwatchConfig};
pub use error::{RunnerError, RunnerResult};
pub use target::TargetSlot;
