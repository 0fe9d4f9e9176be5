//! Configuration loading from TOML files and logging initialization.

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chain endpoint settings.
#[derive(Debug, Deserialize)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Chain ID for signature domain separation.
    pub chain_id: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.network.rpc_url.is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }
        if self.network.chain_id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chain_id",
                reason: "must be non-zero".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber with this config's logging settings.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig {
                rpc_url: "https://eth.llamarpc.com".into(),
                chain_id: 1,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
