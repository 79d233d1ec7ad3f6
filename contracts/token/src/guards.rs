//! Cross-cutting preconditions shared by the entry points.
//!
//! Each guard only reads state. Entry points apply them as an explicit
//! prefix, in a fixed order per operation, so that the reported error is
//! deterministic when several preconditions fail at once.

use soroban_sdk::{Address, Env, String};

use crate::{errors::TokenError, storage};

/// All-zero ed25519 account strkey. Stands in for "no account": the source
/// of mints and the sink of burns.
pub const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ADDRESS))
}

pub fn require_initialized(env: &Env) -> Result<(), TokenError> {
    if !storage::is_initialized(env) {
        return Err(TokenError::NotInitialized);
    }
    Ok(())
}

/// Authenticates `caller` and checks it is the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
    caller.require_auth();
    let owner = storage::get_owner(env).ok_or(TokenError::NotInitialized)?;
    if *caller != owner {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

pub fn require_not_blacklisted(env: &Env, id: &Address) -> Result<(), TokenError> {
    if storage::is_blacklisted(env, id) {
        return Err(TokenError::Blacklisted);
    }
    Ok(())
}

pub fn require_active(env: &Env) -> Result<(), TokenError> {
    if storage::is_paused(env) {
        return Err(TokenError::Paused);
    }
    Ok(())
}

pub fn require_paused(env: &Env) -> Result<(), TokenError> {
    if !storage::is_paused(env) {
        return Err(TokenError::NotPaused);
    }
    Ok(())
}

/// The ledger never holds its own tokens, and nothing is sent to the sink.
pub fn require_valid_recipient(env: &Env, to: &Address) -> Result<(), TokenError> {
    if *to == env.current_contract_address() || *to == zero_address(env) {
        return Err(TokenError::InvalidRecipient);
    }
    Ok(())
}

pub fn require_valid_spender(env: &Env, spender: &Address) -> Result<(), TokenError> {
    if *spender == env.current_contract_address() || *spender == zero_address(env) {
        return Err(TokenError::InvalidSpender);
    }
    Ok(())
}
