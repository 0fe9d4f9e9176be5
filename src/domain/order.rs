//! Order payload and expiry defaults.

use alloy_primitives::{Address, U256};

/// Default order lifetime: 30 days, in seconds.
pub const ORDER_TTL_SECS: u64 = 30 * 24 * 3600;

/// Compute the default expiration for an order created at `now_secs`.
///
/// Evaluated at call entry so long-lived processes never reuse a stale
/// timestamp.
pub fn default_expiry(now_secs: u64) -> u64 {
    now_secs + ORDER_TTL_SECS
}

/// The payload of one order-creation transaction.
///
/// Built fresh for every call and dropped once the transaction is
/// submitted; nothing here is persisted or cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// NFT contract holding the asset.
    pub nft_address: Address,
    /// Token ID of the asset within its contract.
    pub asset_id: U256,
    /// Sale price in wei.
    pub price_wei: U256,
    /// Unix timestamp after which the order lapses.
    pub expires_at: u64,
    /// Seller address the transaction is sent from.
    pub sender: Address,
}

/// Result of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutcome {
    /// Transaction hash for tracking.
    pub tx_hash: String,
}
