//! Order creation flow.
//!
//! Sequential and fail-fast: resolve the marketplace, resolve the caller,
//! ensure transfer approval, then submit the order. Every awaited step
//! propagates its error unchanged; nothing is retried and nothing is kept
//! client-side on failure.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::domain::{default_expiry, to_wei, OrderRequest, TxOutcome};
use crate::error::Result;
use crate::port::{AccountProvider, MarketplaceOrders, TransferApproval};

/// Creates marketplace orders, guaranteeing transfer approval first.
///
/// Holds no chain state of its own; everything lives in the wallet and the
/// contracts behind the ports. Concurrent calls are not coordinated: two
/// callers may both observe a missing approval and both grant it, which
/// wastes gas but is safe because the approval flag is idempotent.
pub struct OrderService {
    account: Arc<dyn AccountProvider>,
    approval: Arc<dyn TransferApproval>,
    marketplace: Arc<dyn MarketplaceOrders>,
}

impl OrderService {
    pub fn new(
        account: Arc<dyn AccountProvider>,
        approval: Arc<dyn TransferApproval>,
        marketplace: Arc<dyn MarketplaceOrders>,
    ) -> Self {
        Self {
            account,
            approval,
            marketplace,
        }
    }

    /// Create an order, price in MANA (1 = 1 MANA).
    ///
    /// Checks whether the caller has approved the marketplace as operator
    /// for `nft_address` and grants the approval first if not; the order
    /// transaction is only submitted once the approval is confirmed.
    ///
    /// `expires_at` defaults to 30 days from now, computed at call entry.
    /// A supplied value is passed through unvalidated; keeping it in the
    /// future is the caller's responsibility.
    ///
    /// # Side effects
    ///
    /// Submits zero or one approval transaction, then one order
    /// transaction. Both are irreversible and cost the caller gas.
    ///
    /// # Errors
    ///
    /// Returns an error if the account cannot be resolved, the approval
    /// flag cannot be read or set, the price has sub-wei precision, or the
    /// order transaction is rejected. An approval that landed before a
    /// later failure persists on-chain; re-invoking skips it.
    pub async fn create_order(
        &self,
        nft_address: Address,
        asset_id: U256,
        price: Decimal,
        expires_at: Option<u64>,
    ) -> Result<TxOutcome> {
        let expires_at =
            expires_at.unwrap_or_else(|| default_expiry(Utc::now().timestamp() as u64));

        let operator = self.marketplace.address();
        let sender = self.account.user_account().await?;

        let approved = self
            .approval
            .is_approved_for_all(nft_address, sender, operator)
            .await?;
        debug!(
            nft = %nft_address,
            owner = %sender,
            operator = %operator,
            approved,
            "Checked operator approval"
        );

        if !approved {
            let outcome = self
                .approval
                .set_approval_for_all(nft_address, operator, true)
                .await?;
            info!(
                nft = %nft_address,
                operator = %operator,
                tx_hash = %outcome.tx_hash,
                "Granted marketplace transfer approval"
            );
        }

        let request = OrderRequest {
            nft_address,
            asset_id,
            price_wei: to_wei(price)?,
            expires_at,
            sender,
        };

        let outcome = self.marketplace.create_order(&request).await?;
        info!(
            nft = %nft_address,
            asset_id = %asset_id,
            price = %price,
            expires_at,
            tx_hash = %outcome.tx_hash,
            "Order created"
        );

        Ok(outcome)
    }
}
