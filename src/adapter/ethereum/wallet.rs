//! Signer-backed account resolution.

use std::str::FromStr;

use alloy_primitives::Address;
use alloy_signer::Signer as _;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use super::settings::MarketplaceRuntimeConfig;
use crate::error::{ConfigError, Result};
use crate::port::AccountProvider;

/// Account provider backed by a local private-key signer.
///
/// The resolved address is the one every transaction in the order flow is
/// sent from.
pub struct EthereumAccount {
    /// Local signer derived from the wallet private key.
    signer: PrivateKeySigner,
}

impl EthereumAccount {
    /// Create an account provider from runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the private key is missing or invalid.
    pub fn new(config: &MarketplaceRuntimeConfig) -> Result<Self> {
        if config.private_key.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "WALLET_PRIVATE_KEY",
            }
            .into());
        }

        let signer = PrivateKeySigner::from_str(&config.private_key)
            .map_err(|e| ConfigError::InvalidValue {
                field: "WALLET_PRIVATE_KEY",
                reason: e.to_string(),
            })?
            .with_chain_id(Some(config.chain_id));

        Ok(Self { signer })
    }

    /// Return the wallet address derived from the private key.
    #[must_use]
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

#[async_trait]
impl AccountProvider for EthereumAccount {
    async fn user_account(&self) -> Result<Address> {
        Ok(self.signer.address())
    }
}
