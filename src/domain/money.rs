//! Exact conversion between human-scale prices and chain base units.
//!
//! Marketplace prices are quoted as decimal MANA (1 = 1 MANA) but the
//! contract takes the amount in wei, the 18-decimal base unit. Conversion
//! is exact: an amount with sub-wei precision is an error, never rounded.

use alloy_primitives::U256;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{ChainError, Result};

/// Number of decimals in the chain's base unit.
pub const MANA_DECIMALS: u32 = 18;

/// Convert a decimal price to wei (base units).
///
/// # Errors
///
/// Returns [`ChainError::InvalidInput`] if the amount is negative, carries
/// more than 18 fractional digits, or overflows the decimal range when
/// scaled.
pub fn to_wei(amount: Decimal) -> Result<U256> {
    if amount.is_sign_negative() {
        return Err(ChainError::InvalidInput {
            field: "price",
            reason: format!("cannot represent negative amount {amount} in base units"),
        }
        .into());
    }

    let scaled = amount
        .checked_mul(Decimal::from(10u64.pow(MANA_DECIMALS)))
        .ok_or_else(|| ChainError::InvalidInput {
            field: "price",
            reason: format!("amount {amount} overflows when scaled to base units"),
        })?;

    if !scaled.fract().is_zero() {
        return Err(ChainError::InvalidInput {
            field: "price",
            reason: format!("amount {amount} has sub-wei precision"),
        }
        .into());
    }

    let units = scaled.to_u128().ok_or_else(|| ChainError::InvalidInput {
        field: "price",
        reason: format!("amount {amount} does not fit in base units"),
    })?;

    Ok(U256::from(units))
}

/// Convert wei back to a decimal price, for display and logging.
///
/// Amounts beyond the `Decimal` range saturate to [`Decimal::MAX`].
pub fn from_wei(units: U256) -> Decimal {
    let int_val: u128 = units.try_into().unwrap_or(u128::MAX);
    match Decimal::from_u128(int_val) {
        Some(value) => value / Decimal::from(10u64.pow(MANA_DECIMALS)),
        None => Decimal::MAX,
    }
}
