#![no_std]

#[cfg(test)]
extern crate std;

use canndollar_migration_agent_interface::MigrationAgent;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockAgentError {
    NotInitialized = 900,
    Rejected = 901,
    Overflow = 902,
}

#[contracttype]
#[derive(Clone, Debug)]
enum DataKey {
    Source,
    Rejecting,
    TotalMigrated,
    Balance(Address),
}

/// Successor ledger stand-in. Records every credit it receives from the
/// source token so tests can compare it with what the token burned.
#[contract]
pub struct MockMigrationAgent;

#[contractimpl]
impl MockMigrationAgent {
    /// Binds the agent to the token allowed to call `migrate_from`.
    pub fn initialize(env: Env, source: Address) {
        env.storage().instance().set(&DataKey::Source, &source);
    }

    /// When set, every subsequent `migrate_from` traps.
    pub fn set_rejecting(env: Env, rejecting: bool) {
        env.storage().instance().set(&DataKey::Rejecting, &rejecting);
    }

    pub fn balance(env: Env, id: Address) -> u128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn total_migrated(env: Env) -> u128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalMigrated)
            .unwrap_or(0)
    }
}

#[contractimpl]
impl MigrationAgent for MockMigrationAgent {
    fn migrate_from(env: Env, from: Address, amount: u128) {
        let source: Address = env
            .storage()
            .instance()
            .get(&DataKey::Source)
            .unwrap_or_else(|| panic_with_error!(&env, MockAgentError::NotInitialized));
        // Only the bound token may credit balances here.
        source.require_auth();

        let rejecting: bool = env
            .storage()
            .instance()
            .get(&DataKey::Rejecting)
            .unwrap_or(false);
        if rejecting {
            panic_with_error!(&env, MockAgentError::Rejected);
        }

        let key = DataKey::Balance(from);
        let current: u128 = env.storage().persistent().get(&key).unwrap_or(0);
        let updated = current
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, MockAgentError::Overflow));
        env.storage().persistent().set(&key, &updated);

        let total = Self::total_migrated(env.clone())
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, MockAgentError::Overflow));
        env.storage().instance().set(&DataKey::TotalMigrated, &total);
    }
}
