//! Chain-agnostic domain types for marketplace orders.

mod money;
mod order;

pub use money::{from_wei, to_wei, MANA_DECIMALS};
pub use order::{default_expiry, OrderRequest, TxOutcome, ORDER_TTL_SECS};
