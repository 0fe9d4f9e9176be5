//! Account resolution port.

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::error::Result;

/// Port for resolving the active caller's account.
///
/// # Errors
///
/// Methods return [`Result`] when the wallet cannot be reached.
#[async_trait]
pub trait AccountProvider: Send + Sync {
    /// Return the address transactions are sent from.
    async fn user_account(&self) -> Result<Address>;
}
