//! Configuration types for prop-ledger

use crate::ledger::RiskSettings;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub account: AccountConfig,
    #[serde(default)]
    pub risk: RiskSettings,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Account configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    /// Equity the ledger starts with
    pub initial_equity: Decimal,
    /// Optional path for the JSON-file state store
    pub state_path: Option<std::path::PathBuf>,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
