//! Transfer approval port for ERC-721 operator workflows.
//!
//! Defines the interface for reading and granting the per-owner
//! approval-for-all flag an NFT contract keeps for operator contracts.

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::domain::TxOutcome;
use crate::error::Result;

/// Port for managing ERC-721 operator approvals.
///
/// Implementations talk to the asset contract named by `nft_address`.
/// Granting approval is idempotent on-chain: re-approving an already
/// approved operator wastes gas but changes nothing.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Errors
///
/// Methods return [`Result`] for chain interaction failures.
#[async_trait]
pub trait TransferApproval: Send + Sync {
    /// Whether `owner` has granted `operator` blanket transfer rights for
    /// all of its assets under `nft_address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be read from the chain.
    async fn is_approved_for_all(
        &self,
        nft_address: Address,
        owner: Address,
        operator: Address,
    ) -> Result<bool>;

    /// Submit an approval-setting transaction and wait for it to land.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction is rejected or the receipt
    /// cannot be obtained.
    async fn set_approval_for_all(
        &self,
        nft_address: Address,
        operator: Address,
        approved: bool,
    ) -> Result<TxOutcome>;
}
