use soroban_sdk::{Address, Env};

use crate::{errors::TokenError, math, storage};

/// Overwrites the allowance. Not additive: changing a nonzero allowance
/// safely means setting it to zero first.
pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: u128) {
    storage::write_allowance(env, owner, spender, amount);
}

/// Computes the allowance left after spending `amount`, without writing it.
pub fn remaining_after_spend(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: u128,
) -> Result<u128, TokenError> {
    math::spend(storage::read_allowance(env, owner, spender), amount)
}
