//! Marketplace contract adapter.
//!
//! Submits order-creation transactions to the marketplace contract. The
//! contract entry point takes the NFT contract, the asset ID, the price in
//! wei, and the expiration timestamp; the seller is the transaction sender.

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use alloy_provider::ProviderBuilder;
use alloy_signer::Signer as _;
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::info;
use url::Url;

use super::settings::{Environment, MarketplaceRuntimeConfig};
use crate::domain::{OrderRequest, TxOutcome};
use crate::error::{ChainError, ConfigError, Result};
use crate::port::MarketplaceOrders;

// Marketplace interface (minimal for order creation)
sol! {
    #[sol(rpc)]
    contract IMarketplace {
        function createOrder(address nftAddress, uint256 assetId, uint256 priceInWei, uint256 expiresAt) external;
    }
}

/// Order submitter for the on-chain marketplace.
pub struct MarketplaceContract {
    /// Local signer derived from the wallet private key.
    signer: PrivateKeySigner,
    /// JSON-RPC endpoint.
    rpc_url: Url,
    /// Deployed marketplace contract address.
    address: Address,
    /// Current deployment environment (testnet or mainnet).
    environment: Environment,
}

impl MarketplaceContract {
    /// Create a new marketplace adapter from runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the private key is missing or invalid, or if
    /// the RPC URL or marketplace address does not parse.
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

        let rpc_url = config
            .rpc_url
            .parse()
            .map_err(|e: url::ParseError| ConfigError::InvalidValue {
                field: "RPC_URL",
                reason: e.to_string(),
            })?;

        let address =
            Address::from_str(&config.marketplace_address).map_err(|e| {
                ConfigError::InvalidValue {
                    field: "MARKETPLACE_ADDRESS",
                    reason: e.to_string(),
                }
            })?;

        Ok(Self {
            signer,
            rpc_url,
            address,
            environment: config.environment,
        })
    }

    /// Return the deployment environment this adapter signs for.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }
}

#[async_trait]
impl MarketplaceOrders for MarketplaceContract {
    fn address(&self) -> Address {
        self.address
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<TxOutcome> {
        info!(
            marketplace = %self.address,
            nft = %request.nft_address,
            asset_id = %request.asset_id,
            price_wei = %request.price_wei,
            expires_at = request.expires_at,
            environment = %self.environment,
            "Submitting order transaction"
        );

        let wallet = alloy_provider::network::EthereumWallet::from(self.signer.clone());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(self.rpc_url.clone());
        let marketplace = IMarketplace::new(self.address, &provider);

        let pending_tx = marketplace
            .createOrder(
                request.nft_address,
                request.asset_id,
                request.price_wei,
                U256::from(request.expires_at),
            )
            .from(request.sender)
            .send()
            .await
            .map_err(|e| ChainError::Rejected(format!("order not accepted: {e}")))?;

        let receipt = pending_tx
            .get_receipt()
            .await
            .map_err(|e| ChainError::Network(format!("failed to get order receipt: {e}")))?;

        if !receipt.status() {
            return Err(ChainError::Rejected("order transaction reverted".into()).into());
        }

        let tx_hash = format!("{:?}", receipt.transaction_hash);
        info!(tx_hash = %tx_hash, "Order transaction confirmed");

        Ok(TxOutcome { tx_hash })
    }
}
