use slotwatch_clock::ClockError;
use slotwatch_ports::FetchError;
use slotwatch_report::ReportError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Clock error: {0}")]
    Clock(#[from] ClockError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RunnerResult<T> = std::result::Result<T, RunnerError>;
