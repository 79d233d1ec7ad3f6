use soroban_sdk::{log, Address, Env};

use crate::{errors::TokenError, events::TokenEvents, guards, ledger, storage};

/// Adds `user` to the blacklist. Adding a present address is a silent no-op.
pub fn add(env: &Env, caller: &Address, user: &Address) -> Result<(), TokenError> {
    guards::require_owner(env, caller)?;

    if storage::is_blacklisted(env, user) {
        return Ok(());
    }
    storage::set_blacklisted(env, user, true);
    log!(env, "blacklist: added", user);
    TokenEvents::added_black_list(env, user);
    Ok(())
}

/// Removes `user` from the blacklist. Removing an absent address is a
/// silent no-op.
pub fn remove(env: &Env, caller: &Address, user: &Address) -> Result<(), TokenError> {
    guards::require_owner(env, caller)?;

    if !storage::is_blacklisted(env, user) {
        return Ok(());
    }
    storage::set_blacklisted(env, user, false);
    log!(env, "blacklist: removed", user);
    TokenEvents::removed_black_list(env, user);
    Ok(())
}

/// Destroys the entire balance of a blacklisted address.
///
/// Owner-triggered administrative action: the holder's own authorization is
/// not required. Membership in the blacklist is left unchanged.
///
/// # Errors
/// | Error            | Condition                        |
/// |------------------|----------------------------------|
/// | `Unauthorized`   | `caller` is not the owner        |
/// | `NotBlacklisted` | `user` is not on the blacklist   |
/// | `ArithmeticFault`| supply would underflow           |
pub fn burn_funds(env: &Env, caller: &Address, user: &Address) -> Result<u128, TokenError> {
    guards::require_owner(env, caller)?;

    if !storage::is_blacklisted(env, user) {
        return Err(TokenError::NotBlacklisted);
    }

    let amount = ledger::burn_all(env, user)?;
    log!(env, "blacklist: burned funds", user, amount);

    TokenEvents::transfer(env, user, &guards::zero_address(env), amount);
    TokenEvents::blacklisted_funds_burned(env, user, amount);
    Ok(amount)
}
