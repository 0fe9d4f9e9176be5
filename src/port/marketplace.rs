//! Marketplace contract port.

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::domain::{OrderRequest, TxOutcome};
use crate::error::Result;

/// Port for submitting orders to the marketplace contract.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Errors
///
/// Methods return [`Result`] for chain interaction failures.
#[async_trait]
pub trait MarketplaceOrders: Send + Sync {
    /// Address of the marketplace contract.
    ///
    /// This is the operator that needs transfer approval before an order
    /// can settle.
    fn address(&self) -> Address;

    /// Submit an order-creation transaction and wait for it to land.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction is rejected or the receipt
    /// cannot be obtained.
    async fn create_order(&self, request: &OrderRequest) -> Result<TxOutcome>;
}
