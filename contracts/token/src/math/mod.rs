//! Checked unsigned arithmetic for balance, allowance and supply accounting.
//! Nothing here touches storage, so every result can be computed before the
//! first write of an operation.

use crate::errors::TokenError;

/// Adds `amount` to a balance.
pub fn credit(balance: u128, amount: u128) -> Result<u128, TokenError> {
    balance
        .checked_add(amount)
        .ok_or(TokenError::ArithmeticFault)
}

/// Removes `amount` from a balance. A shortfall is `InsufficientBalance`.
pub fn debit(balance: u128, amount: u128) -> Result<u128, TokenError> {
    balance
        .checked_sub(amount)
        .ok_or(TokenError::InsufficientBalance)
}

/// Consumes `amount` of an allowance.
pub fn spend(allowance: u128, amount: u128) -> Result<u128, TokenError> {
    allowance
        .checked_sub(amount)
        .ok_or(TokenError::InsufficientAllowance)
}

/// Total supply after minting `amount`, enforcing `max_supply`.
pub fn supply_after_mint(
    total_supply: u128,
    amount: u128,
    max_supply: u128,
) -> Result<u128, TokenError> {
    let next = total_supply
        .checked_add(amount)
        .ok_or(TokenError::ArithmeticFault)?;
    if next > max_supply {
        return Err(TokenError::CapExceeded);
    }
    Ok(next)
}

/// Total supply after burning `amount`.
pub fn supply_after_burn(total_supply: u128, amount: u128) -> Result<u128, TokenError> {
    total_supply
        .checked_sub(amount)
        .ok_or(TokenError::ArithmeticFault)
}
