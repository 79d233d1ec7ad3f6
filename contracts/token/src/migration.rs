use soroban_sdk::{log, Address, Env};

use canndollar_migration_agent_interface::MigrationAgentClient;

use crate::{errors::TokenError, events::TokenEvents, guards, ledger, storage};

/// Wires the successor ledger. Once set the agent cannot be replaced.
pub fn set_agent(env: &Env, caller: &Address, agent: &Address) -> Result<(), TokenError> {
    guards::require_owner(env, caller)?;

    if *agent == guards::zero_address(env) || *agent == env.current_contract_address() {
        return Err(TokenError::InvalidRecipient);
    }
    if storage::get_migration_agent(env).is_some() {
        return Err(TokenError::AgentAlreadyConfigured);
    }

    storage::set_migration_agent(env, agent);
    log!(env, "migration: agent configured", agent);
    Ok(())
}

/// Moves the caller's whole balance to the successor ledger.
///
/// # Flow
/// 1. **Checks**: agent configured, caller holds a nonzero balance.
/// 2. **Burn**: the balance leaves this ledger exactly as a burn would,
///    shrinking total supply.
/// 3. **Delegate**: `agent.migrate_from(caller, amount)`, called once.
///    A trap inside the agent aborts the whole invocation, burn included.
/// 4. **Emit**: `transfer(caller -> zero)` then `migrate(caller, agent)`.
///
/// # Errors
/// | Error                | Condition                         |
/// |----------------------|-----------------------------------|
/// | `AgentNotConfigured` | `set_migration_agent` never called |
/// | `InsufficientBalance`| caller's balance is zero          |
pub fn migrate(env: &Env, caller: &Address) -> Result<u128, TokenError> {
    caller.require_auth();

    let agent = storage::get_migration_agent(env).ok_or(TokenError::AgentNotConfigured)?;
    let amount = storage::read_balance(env, caller);
    if amount == 0 {
        return Err(TokenError::InsufficientBalance);
    }

    ledger::burn(env, caller, amount)?;

    MigrationAgentClient::new(env, &agent).migrate_from(caller, &amount);

    log!(env, "migration: migrated", caller, amount);
    TokenEvents::transfer(env, caller, &guards::zero_address(env), amount);
    TokenEvents::migrate(env, caller, &agent, amount);
    Ok(amount)
}
