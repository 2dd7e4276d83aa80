use serde::{Deserialize, Serialize};
use slotwatch_clock::ChainConfig;
use slotwatch_gateway::ExporterConfig;
use std::time::Duration;

/// Root configuration for slotwatch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotwatchConfig {
    #[serde(default)]
    pub exporter: ExporterSettings,
    /// Chain used when none is given on the command line
    #[serde(default = "default_chain")]
    pub default_chain: String,
    /// Extra chains, registered on top of the built-in ones
    #[serde(default)]
    pub chains: Vec<ChainConfig>,
}

/// Exporter connection settings (JSON representation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Role filter used when none is given on the command line
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
}

impl Default for ExporterSettings {
    fn default() -> Self {
        ExporterSettings {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            roles: default_roles(),
        }
    }
}

impl ExporterSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Convert to the gateway's ExporterConfig
    pub fn to_exporter_config(&self) -> ExporterConfig {
        ExporterConfig::new(self.base_url.clone()).with_timeout(self.timeout())
    }
}

// Default value functions for serde
fn default_chain() -> String {
    slotwatch_clock::MAINNET.to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_ms() -> u64 {
    15_000
}

fn default_roles() -> Vec<String> {
    vec!["PROPOSER".to_string()]
}
