//! ERC-721 operator approval over JSON-RPC.
//!
//! Reads and grants the approval-for-all flag on the asset contract that
//! lets the marketplace move the seller's tokens at settlement time.

use std::str::FromStr;

use alloy_primitives::Address;
use alloy_provider::ProviderBuilder;
use alloy_signer::Signer as _;
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::info;
use url::Url;

use super::settings::{Environment, MarketplaceRuntimeConfig};
use crate::domain::TxOutcome;
use crate::error::{ChainError, ConfigError, Result};
use crate::port::TransferApproval;

// ERC-721 interface (minimal for operator approval)
sol! {
    #[sol(rpc)]
    contract IERC721 {
        function isApprovedForAll(address owner, address operator) external view returns (bool);
        function setApprovalForAll(address operator, bool approved) external;
    }
}

/// Transfer approval handler for ERC-721 asset contracts.
///
/// Reads go over an unsigned provider; the approval grant is signed with
/// the wallet key and awaited until its receipt lands, since order
/// creation must not run before the approval is confirmed.
pub struct Erc721Approval {
    /// Local signer derived from the wallet private key.
    signer: PrivateKeySigner,
    /// JSON-RPC endpoint.
    rpc_url: Url,
    /// Current deployment environment (testnet or mainnet).
    environment: Environment,
}

impl Erc721Approval {
    /// Create a new approval handler from runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the private key is missing or invalid, or the
    /// RPC URL does not parse.
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

        Ok(Self {
            signer,
            rpc_url,
            environment: config.environment,
        })
    }

    /// Return the deployment environment this handler signs for.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }
}

#[async_trait]
impl TransferApproval for Erc721Approval {
    async fn is_approved_for_all(
        &self,
        nft_address: Address,
        owner: Address,
        operator: Address,
    ) -> Result<bool> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());
        let nft = IERC721::new(nft_address, &provider);

        let approved = nft
            .isApprovedForAll(owner, operator)
            .call()
            .await
            .map_err(|e| ChainError::Network(format!("failed to read approval flag: {e}")))?;

        Ok(approved)
    }

    async fn set_approval_for_all(
        &self,
        nft_address: Address,
        operator: Address,
        approved: bool,
    ) -> Result<TxOutcome> {
        info!(
            nft = %nft_address,
            operator = %operator,
            approved,
            environment = %self.environment,
            "Submitting approval transaction"
        );

        let wallet = alloy_provider::network::EthereumWallet::from(self.signer.clone());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(self.rpc_url.clone());
        let nft = IERC721::new(nft_address, &provider);

        let pending_tx = nft
            .setApprovalForAll(operator, approved)
            .send()
            .await
            .map_err(|e| ChainError::Rejected(format!("approval not accepted: {e}")))?;

        let receipt = pending_tx
            .get_receipt()
            .await
            .map_err(|e| ChainError::Network(format!("failed to get approval receipt: {e}")))?;

        if !receipt.status() {
            return Err(ChainError::Rejected("approval transaction reverted".into()).into());
        }

        let tx_hash = format!("{:?}", receipt.transaction_hash);
        info!(tx_hash = %tx_hash, "Approval transaction confirmed");

        Ok(TxOutcome { tx_hash })
    }
}


// -------------------------------------------------------------------------
// Integration tests (behind feature flag)
// -------------------------------------------------------------------------
