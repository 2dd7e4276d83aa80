use slotwatch_clock::{ChainRegistry, ClockError};
use std::path::Path;
use thiserror::Error;

use super::types::SlotwatchConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid chain definition: {0}")]
    InvalidChain(#[from] ClockError),
    #[error("Default chain not found: {0}")]
    DefaultChainNotFound(String),
    #[error("Exporter base URL is empty")]
    EmptyBaseUrl,
    #[error("Exporter timeout must be positive")]
    ZeroTimeout,
    #[error("No default roles configured")]
    NoRoles,
}

/// Load configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SlotwatchConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<SlotwatchConfig, ConfigError> {
    let config: SlotwatchConfig = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<SlotwatchConfig, ConfigError> {
    let default_config = include_str!("slotwatch.json");
    load_config_from_str(default_config)
}

impl SlotwatchConfig {
    /// Built-in chains plus the ones defined in this configuration
    pub fn registry(&self) -> Result<ChainRegistry, ConfigError> {
        let mut registry = ChainRegistry::builtin();
        for chain in &self.chains {
            registry.register(chain.clone())?;
        }
        Ok(registry)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exporter.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.exporter.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.exporter.roles.is_empty() {
            return Err(ConfigError::NoRoles);
        }
        if !self.registry()?.contains(&self.default_chain) {
            return Err(ConfigError::DefaultChainNotFound(
                self.default_chain.clone(),
            ));
        }
        Ok(())
    }
}
