//! Ports: interfaces to the chain collaborators the order flow depends on.
//!
//! Each trait covers one external collaborator (the wallet, the asset
//! contract's approval registry, the marketplace contract) so the flow in
//! [`crate::service`] can be driven by real adapters or by test mocks.

pub mod account;
pub mod approval;
pub mod marketplace;

pub use account::AccountProvider;
pub use approval::TransferApproval;
pub use marketplace::MarketplaceOrders;
