// src/config.rs

//! Manages adapter configuration: loading, defaults, and validation.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;

/// Client-side knobs for the operations layer. Everything here is optional;
/// the default configuration changes no command the adapter would otherwise
/// issue.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// COUNT hint applied to SSCAN pages when the per-call `ScanOptions` carry
    /// none. `None` leaves the page size to the server.
    #[serde(default)]
    pub scan_count: Option<usize>,

    /// Rejects multi-key set operations if the number of input keys exceeds
    /// this limit. `0` disables the check.
    #[serde(default = "default_max_set_operation_keys")]
    pub max_set_operation_keys: usize,
}

fn default_max_set_operation_keys() -> usize {
    0
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            scan_count: None,
            max_set_operation_keys: default_max_set_operation_keys(),
        }
    }
}

impl AdapterConfig {
    /// Creates a new `AdapterConfig` instance by reading and parsing a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        let config: AdapterConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from '{path}'"))?;

        config.validate()?;
        info!(
            scan_count = ?config.scan_count,
            max_set_operation_keys = config.max_set_operation_keys,
            "adapter configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan_count == Some(0) {
            bail!("scan_count must be a positive page-size hint, or absent");
        }
        Ok(())
    }
}
