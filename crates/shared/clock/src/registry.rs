use chrono::{DateTime, Duration};
use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::error::{ClockError, ClockResult};

pub const MAINNET: &str = "mainnet";
pub const HOODI: &str = "hoodi";

/// Definition of a chain as it appears in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Canonical network name, matched exactly
    pub name: String,
    /// Start of slot 0, Unix seconds
    pub genesis_time: i64,
    /// Length of every slot on this chain
    pub slot_duration_ms: u64,
}

impl ChainConfig {
    pub fn new(name: impl Into<String>, genesis_time: i64, slot_duration_ms: u64) -> Self {
        ChainConfig {
            name: name.into(),
            genesis_time,
            slot_duration_ms,
        }
    }

    /// Validate and convert into a usable `Chain`
    pub fn to_chain(&self) -> ClockResult<Chain> {
        let genesis = DateTime::from_timestamp(self.genesis_time, 0).ok_or_else(|| {
            ClockError::InvalidChainConfig {
                name: self.name.clone(),
                reason: format!("genesis time {} is not representable", self.genesis_time),
            }
        })?;
        let slot_duration = i64::try_from(self.slot_duration_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .ok_or_else(|| ClockError::InvalidChainConfig {
                name: self.name.clone(),
                reason: format!("slot duration {}ms is too large", self.slot_duration_ms),
            })?;

        Chain::new(self.name.clone(), genesis, slot_duration)
    }
}

/// Networks known without any configuration
pub fn builtin_chains() -> Vec<ChainConfig> {
    vec![
        // 2020-12-01 12:00:23 UTC
        ChainConfig::new(MAINNET, 1_606_824_023, 12_000),
        // 2025-03-17 12:10:00 UTC
        ChainConfig::new(HOODI, 1_742_213_400, 12_000),
    ]
}

/// Name -> chain definition table
///
/// Entries are validated on registration, so lookups of a registered name
/// only fail for unknown names. Registration order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: Vec<ChainConfig>,
}

impl ChainRegistry {
    /// Registry with no chains
    pub fn empty() -> Self {
        ChainRegistry { chains: Vec::new() }
    }

    /// Registry with the built-in networks
    pub fn builtin() -> Self {
        ChainRegistry {
            chains: builtin_chains(),
        }
    }

    /// Add a chain, replacing any existing entry with the same name
    pub fn register(&mut self, config: ChainConfig) -> ClockResult<()> {
        config.to_chain()?;

        match self.chains.iter_mut().find(|c| c.name == config.name) {
            Some(existing) => {
                log::debug!("Overriding chain definition for {}", config.name);
                *existing = config;
            }
            None => self.chains.push(config),
        }
        Ok(())
    }

    /// Resolve a chain by its exact, case-sensitive name
    pub fn lookup(&self, name: &str) -> ClockResult<Chain> {
        let config = self
            .get(name)
            .ok_or_else(|| ClockError::UnknownChain(name.to_string()))?;
        let chain = config.to_chain()?;
        log::debug!(
            "Resolved chain {} (genesis {}, slot duration {}ms)",
            chain.name(),
            chain.genesis_time(),
            chain.slot_duration().num_milliseconds()
        );
        Ok(chain)
    }

    pub fn get(&self, name: &str) -> Option<&ChainConfig> {
        self.chains.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.chains.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChainConfig> {
        self.chains.iter()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve one of the built-in networks by name
pub fn lookup_chain(name: &str) -> ClockResult<Chain> {
    ChainRegistry::builtin().lookup(name)
}
