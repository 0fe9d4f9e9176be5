//! Ethereum adapters backed by alloy.
//!
//! One adapter per port: a signer-backed account provider, an ERC-721
//! approval handler, and the marketplace contract itself. All three share
//! the same [`MarketplaceRuntimeConfig`] and build their RPC providers per
//! call; no connection is cached between operations.

pub mod approval;
pub mod marketplace;
pub mod settings;
pub mod wallet;

pub use approval::Erc721Approval;
pub use marketplace::MarketplaceContract;
pub use settings::{Environment, MarketplaceRuntimeConfig};
pub use wallet::EthereumAccount;
