//! Balance and supply accounting.
//!
//! Every function computes all new values first and writes only once they
//! are known to be valid, so the conservation invariant
//! `sum(balances) == total_supply <= max_supply` holds between operations.

use soroban_sdk::{Address, Env};

use crate::{errors::TokenError, math, storage};

/// Credits `amount` to `to` and grows the supply, bounded by the cap.
pub fn mint(env: &Env, to: &Address, amount: u128) -> Result<(), TokenError> {
    let max_supply = storage::get_max_supply(env).ok_or(TokenError::NotInitialized)?;
    let total_supply =
        math::supply_after_mint(storage::get_total_supply(env), amount, max_supply)?;
    let balance = math::credit(storage::read_balance(env, to), amount)?;

    storage::write_balance(env, to, balance);
    storage::set_total_supply(env, total_supply);
    Ok(())
}

/// Moves `amount` from `from` to `to`. Supply is unchanged.
pub fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), TokenError> {
    let from_balance = math::debit(storage::read_balance(env, from), amount)?;
    if from == to {
        return Ok(());
    }
    let to_balance = math::credit(storage::read_balance(env, to), amount)?;

    storage::write_balance(env, from, from_balance);
    storage::write_balance(env, to, to_balance);
    Ok(())
}

/// Debits `amount` from `from` and shrinks the supply by the same amount.
pub fn burn(env: &Env, from: &Address, amount: u128) -> Result<(), TokenError> {
    let balance = math::debit(storage::read_balance(env, from), amount)?;
    let total_supply = math::supply_after_burn(storage::get_total_supply(env), amount)?;

    storage::write_balance(env, from, balance);
    storage::set_total_supply(env, total_supply);
    Ok(())
}

/// Zeroes the whole balance of `from`, returning what was removed.
pub fn burn_all(env: &Env, from: &Address) -> Result<u128, TokenError> {
    let amount = storage::read_balance(env, from);
    burn(env, from, amount)?;
    Ok(amount)
}
