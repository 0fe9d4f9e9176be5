//! Storefront - NFT marketplace order creation over an on-chain contract.
//!
//! This crate lists non-fungible assets for sale on a marketplace smart
//! contract. The core operation, [`service::OrderService::create_order`],
//! guarantees the selling wallet has granted the marketplace transfer
//! approval before submitting the order-creation transaction.
//!
//! # Architecture
//!
//! Chain collaborators are modeled as ports (async traits) so the order flow
//! can be exercised without a network:
//!
//! - **`port`** - Collaborator contracts
//!   - `AccountProvider` - resolves the active caller address
//!   - `TransferApproval` - reads/writes the operator approval flag
//!   - `MarketplaceOrders` - submits order-creation transactions
//!
//! - **`adapter::ethereum`** - alloy-backed implementations (requires the
//!   `ethereum` feature)
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files, logging setup
//! - [`domain`] - Order payloads and exact price/wei conversion
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for chain collaborators
//! - [`service`] - The order-creation flow
//! - [`adapter`] - Ethereum implementation (requires the `ethereum` feature)
//!
//! # Features
//!
//! - `ethereum` - Enable the alloy-based adapters (signer, RPC, contracts)
//! - `testkit` - Expose scripted port mocks for integration tests
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use alloy_primitives::{address, U256};
//! use rust_decimal_macros::dec;
//! use storefront::adapter::ethereum::{
//!     Erc721Approval, EthereumAccount, MarketplaceContract, MarketplaceRuntimeConfig,
//! };
//! use storefront::service::OrderService;
//!
//! # async fn run() -> storefront::error::Result<()> {
//! let config = MarketplaceRuntimeConfig::from_env()?;
//! let service = OrderService::new(
//!     Arc::new(EthereumAccount::new(&config)?),
//!     Arc::new(Erc721Approval::new(&config)?),
//!     Arc::new(MarketplaceContract::new(&config)?),
//! );
//!
//! let outcome = service
//!     .create_order(
//!         address!("0xF87E31492Faf9A91B02Ee0dEAAd50d51d56D5d4d"),
//!         U256::from(42u64),
//!         dec!(1.5),
//!         None,
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod service;

#[cfg(feature = "ethereum")]
pub mod adapter;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
