#![no_std]

mod allowance;
mod blacklist;
mod errors;
mod events;
mod guards;
mod ledger;
mod math;
mod migration;
mod storage;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std.

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;

pub use errors::TokenError;
pub use guards::ZERO_ADDRESS;
use events::TokenEvents;

/// Fixed display precision.
pub const DECIMALS: u32 = 18;

/// Capped, pausable fungible token with owner-managed blacklist and a
/// one-way migration path to a successor ledger.
#[contract]
pub struct Token;

#[contractimpl]
impl Token {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Sets the deploying `owner`, the display metadata and the immutable
    /// supply cap. The token starts unpaused with zero supply.
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        max_supply: u128,
    ) -> Result<(), TokenError> {
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        owner.require_auth();
        if owner == guards::zero_address(&env) {
            return Err(TokenError::InvalidRecipient);
        }

        storage::set_owner(&env, &owner);
        storage::set_metadata(
            &env,
            &TokenMetadata {
                decimal: DECIMALS,
                name,
                symbol,
            },
        );
        storage::set_max_supply(&env, max_supply);
        storage::set_total_supply(&env, 0);
        storage::set_paused(&env, false);
        storage::extend_instance_ttl(&env);

        log!(&env, "token initialized", owner, max_supply);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Ledger store
    // -----------------------------------------------------------------------

    pub fn mint(env: Env, caller: Address, to: Address, amount: u128) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        guards::require_owner(&env, &caller)?;
        guards::require_valid_recipient(&env, &to)?;
        guards::require_not_blacklisted(&env, &to)?;

        ledger::mint(&env, &to, amount)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::transfer(&env, &guards::zero_address(&env), &to, amount);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: u128) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        from.require_auth();
        guards::require_valid_recipient(&env, &to)?;
        guards::require_not_blacklisted(&env, &from)?;
        guards::require_not_blacklisted(&env, &to)?;
        guards::require_active(&env)?;

        ledger::move_balance(&env, &from, &to, amount)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: u128) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        from.require_auth();

        ledger::burn(&env, &from, amount)?;
        storage::extend_instance_ttl(&env);

        TokenEvents::transfer(&env, &from, &guards::zero_address(&env), amount);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Allowance store
    // -----------------------------------------------------------------------

    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: u128,
    ) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        owner.require_auth();
        guards::require_valid_spender(&env, &spender)?;
        guards::require_not_blacklisted(&env, &owner)?;
        guards::require_not_blacklisted(&env, &spender)?;

        allowance::approve(&env, &owner, &spender, amount);
        storage::extend_instance_ttl(&env);

        TokenEvents::approval(&env, &owner, &spender, amount);
        Ok(())
    }

    /// `spender` moves `amount` of `owner`'s balance to `to`, consuming the
    /// same amount of allowance.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        owner: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        spender.require_auth();
        guards::require_valid_recipient(&env, &to)?;
        guards::require_not_blacklisted(&env, &owner)?;
        guards::require_not_blacklisted(&env, &spender)?;
        guards::require_not_blacklisted(&env, &to)?;
        guards::require_active(&env)?;

        let remaining = allowance::remaining_after_spend(&env, &owner, &spender, amount)?;
        ledger::move_balance(&env, &owner, &to, amount)?;
        storage::write_allowance(&env, &owner, &spender, remaining);
        storage::extend_instance_ttl(&env);

        TokenEvents::transfer(&env, &owner, &to, amount);
        TokenEvents::approval(&env, &owner, &spender, remaining);
        Ok(())
    }

    /// `spender` burns `amount` of `owner`'s balance under delegated
    /// authority; `owner` does not sign.
    pub fn burn_from(
        env: Env,
        spender: Address,
        owner: Address,
        amount: u128,
    ) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        spender.require_auth();

        let remaining = allowance::remaining_after_spend(&env, &owner, &spender, amount)?;
        ledger::burn(&env, &owner, amount)?;
        storage::write_allowance(&env, &owner, &spender, remaining);
        storage::extend_instance_ttl(&env);

        TokenEvents::transfer(&env, &owner, &guards::zero_address(&env), amount);
        TokenEvents::approval(&env, &owner, &spender, remaining);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Access control
    // -----------------------------------------------------------------------

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        guards::require_owner(&env, &caller)?;
        if new_owner == guards::zero_address(&env) {
            return Err(TokenError::InvalidRecipient);
        }

        storage::set_owner(&env, &new_owner);
        storage::extend_instance_ttl(&env);

        log!(&env, "ownership transferred", caller, new_owner);
        TokenEvents::ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Pause gate
    // -----------------------------------------------------------------------

    pub fn pause(env: Env, caller: Address) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        guards::require_owner(&env, &caller)?;
        guards::require_active(&env)?;

        storage::set_paused(&env, true);
        storage::extend_instance_ttl(&env);

        log!(&env, "token paused", caller);
        TokenEvents::paused(&env, &caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        guards::require_owner(&env, &caller)?;
        guards::require_paused(&env)?;

        storage::set_paused(&env, false);
        storage::extend_instance_ttl(&env);

        log!(&env, "token unpaused", caller);
        TokenEvents::unpaused(&env, &caller);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Blacklist registry
    // -----------------------------------------------------------------------

    pub fn add_black_list(env: Env, caller: Address, user: Address) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        blacklist::add(&env, &caller, &user)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn remove_black_list(env: Env, caller: Address, user: Address) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        blacklist::remove(&env, &caller, &user)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Returns the amount destroyed.
    pub fn burn_blacklisted_funds(
        env: Env,
        caller: Address,
        user: Address,
    ) -> Result<u128, TokenError> {
        guards::require_initialized(&env)?;
        let amount = blacklist::burn_funds(&env, &caller, &user)?;
        storage::extend_instance_ttl(&env);
        Ok(amount)
    }

    // -----------------------------------------------------------------------
    // Migration controller
    // -----------------------------------------------------------------------

    pub fn set_migration_agent(
        env: Env,
        caller: Address,
        agent: Address,
    ) -> Result<(), TokenError> {
        guards::require_initialized(&env)?;
        migration::set_agent(&env, &caller, &agent)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Moves the caller's full balance to the migration agent and returns
    /// the amount moved.
    pub fn migrate(env: Env, caller: Address) -> Result<u128, TokenError> {
        guards::require_initialized(&env)?;
        let amount = migration::migrate(&env, &caller)?;
        storage::extend_instance_ttl(&env);
        Ok(amount)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn name(env: Env) -> Result<String, TokenError> {
        storage::get_metadata(&env)
            .map(|m| m.name)
            .ok_or(TokenError::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        storage::get_metadata(&env)
            .map(|m| m.symbol)
            .ok_or(TokenError::NotInitialized)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        storage::get_metadata(&env)
            .map(|m| m.decimal)
            .ok_or(TokenError::NotInitialized)
    }

    pub fn total_supply(env: Env) -> u128 {
        storage::get_total_supply(&env)
    }

    pub fn max_supply(env: Env) -> Result<u128, TokenError> {
        storage::get_max_supply(&env).ok_or(TokenError::NotInitialized)
    }

    pub fn balance(env: Env, id: Address) -> u128 {
        storage::read_balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> u128 {
        storage::read_allowance(&env, &owner, &spender)
    }

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        storage::get_owner(&env).ok_or(TokenError::NotInitialized)
    }

    pub fn is_owner(env: Env, id: Address) -> bool {
        storage::get_owner(&env).map(|o| o == id).unwrap_or(false)
    }

    pub fn paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn is_blacklisted(env: Env, id: Address) -> bool {
        storage::is_blacklisted(&env, &id)
    }

    pub fn migration_agent(env: Env) -> Option<Address> {
        storage::get_migration_agent(&env)
    }
}
