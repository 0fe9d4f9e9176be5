//! Ethereum adapter configuration.
//!
//! Runtime credentials and network settings shared by the signing
//! adapters. Defaults target Ethereum mainnet and the canonical
//! marketplace deployment; everything can be overridden via environment
//! variables.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Deployment environment (testnet vs mainnet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Testnet,
    Mainnet,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Testnet => write!(f, "testnet"),
            Self::Mainnet => write!(f, "mainnet"),
        }
    }
}

/// Marketplace contract address on Ethereum mainnet.
pub const MARKETPLACE_MAINNET: &str = "0x8e5660b4Ab70168b5a6fEeA0e0315cb49c8Cd539";

/// Public Ethereum mainnet RPC endpoint.
const MAINNET_RPC: &str = "https://eth.llamarpc.com";

/// Public Sepolia testnet RPC endpoint.
const SEPOLIA_RPC: &str = "https://ethereum-sepolia-rpc.publicnode.com";

/// Ethereum mainnet chain ID.
const MAINNET_CHAIN_ID: u64 = 1;

/// Runtime credentials and network settings required by the adapters.
#[derive(Debug, Clone)]
pub struct MarketplaceRuntimeConfig {
    /// Wallet private key (hex).
    pub private_key: String,
    /// Chain ID for signature domain separation.
    pub chain_id: u64,
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Marketplace contract address.
    pub marketplace_address: String,
    /// Deployment environment.
    pub environment: Environment,
}

impl MarketplaceRuntimeConfig {
    /// Build the runtime config from environment variables.
    ///
    /// Reads `WALLET_PRIVATE_KEY` (required), `CHAIN_ID` (default 1),
    /// `RPC_URL` and `MARKETPLACE_ADDRESS` (defaulting to the mainnet
    /// endpoint and the canonical marketplace deployment). A `.env` file
    /// in the working directory is honored. On a testnet chain ID,
    /// `MARKETPLACE_ADDRESS` must point at the deployment under test; the
    /// default is only meaningful on mainnet.
    ///
    /// # Errors
    ///
    /// Returns an error if `WALLET_PRIVATE_KEY` is unset or empty, or if
    /// `CHAIN_ID` is not a number.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let private_key = std::env::var("WALLET_PRIVATE_KEY").map_err(|_| {
            ConfigError::MissingField {
                field: "WALLET_PRIVATE_KEY",
            }
        })?;
        if private_key.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "WALLET_PRIVATE_KEY",
            }
            .into());
        }

        let chain_id = match std::env::var("CHAIN_ID") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: "CHAIN_ID",
                reason: format!("not a number: {raw}"),
            })?,
            Err(_) => MAINNET_CHAIN_ID,
        };

        let environment = if chain_id == MAINNET_CHAIN_ID {
            Environment::Mainnet
        } else {
            Environment::Testnet
        };

        let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| {
            match environment {
                Environment::Mainnet => MAINNET_RPC,
                Environment::Testnet => SEPOLIA_RPC,
            }
            .to_string()
        });

        let marketplace_address = std::env::var("MARKETPLACE_ADDRESS")
            .unwrap_or_else(|_| MARKETPLACE_MAINNET.to_string());

        Ok(Self {
            private_key,
            chain_id,
            rpc_url,
            marketplace_address,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use std::str::FromStr;

    #[test]
    fn environment_display_testnet() {
        assert_eq!(format!("{}", Environment::Testnet), "testnet");
    }

    #[test]
    fn environment_display_mainnet() {
        assert_eq!(format!("{}", Environment::Mainnet), "mainnet");
    }

    #[test]
    fn environment_default_is_testnet() {
        assert_eq!(Environment::default(), Environment::Testnet);
    }

    #[test]
    fn marketplace_mainnet_address_is_valid() {
        assert!(MARKETPLACE_MAINNET.starts_with("0x"));
        assert_eq!(MARKETPLACE_MAINNET.len(), 42); // 0x + 40 hex chars
        assert!(Address::from_str(MARKETPLACE_MAINNET).is_ok());
    }

    #[test]
    fn rpc_urls_are_https() {
        assert!(MAINNET_RPC.starts_with("https://"));
        assert!(SEPOLIA_RPC.starts_with("https://"));
    }

    #[test]
    fn runtime_config_with_empty_key_is_invalid() {
        let config = MarketplaceRuntimeConfig {
            private_key: "   ".into(),
            chain_id: 1,
            rpc_url: MAINNET_RPC.into(),
            marketplace_address: MARKETPLACE_MAINNET.into(),
            environment: Environment::Mainnet,
        };

        assert!(config.private_key.trim().is_empty());
    }
}
