use std::time::Duration;

/// Bounded wait for one exporter request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for the exporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ExporterConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ExporterConfig {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
