use soroban_sdk::{contracttype, Address, Env};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

const DAY_IN_LEDGERS: u32 = 17280; // ~1 day in 5s ledgers

const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Owner,
    Paused,
    TotalSupply,
    MaxSupply,
    MigrationAgent,
    Balance(Address),
    Allowance(Address, Address),
    Blacklisted(Address),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_entry_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

// ---------------------------------------------------------------------------
// Instance state
// ---------------------------------------------------------------------------

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_total_supply(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, total_supply: u128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalSupply, &total_supply);
}

pub fn get_max_supply(env: &Env) -> Option<u128> {
    env.storage().instance().get(&DataKey::MaxSupply)
}

pub fn set_max_supply(env: &Env, max_supply: u128) {
    env.storage().instance().set(&DataKey::MaxSupply, &max_supply);
}

/// Display metadata lives under the standard token-interface key so that
/// wallets can read it directly.
pub fn get_metadata(env: &Env) -> Option<TokenMetadata> {
    if !is_initialized(env) {
        return None;
    }
    Some(TokenUtils::new(env).metadata().get_metadata())
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    TokenUtils::new(env).metadata().set_metadata(metadata);
}

pub fn get_migration_agent(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::MigrationAgent)
}

pub fn set_migration_agent(env: &Env, agent: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::MigrationAgent, agent);
}

// ---------------------------------------------------------------------------
// Per-account state
// ---------------------------------------------------------------------------

pub fn read_balance(env: &Env, id: &Address) -> u128 {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

/// Zero balances are removed instead of stored.
pub fn write_balance(env: &Env, id: &Address, amount: u128) {
    let key = DataKey::Balance(id.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_entry_ttl(env, &key);
    }
}

pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> u128 {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, amount: u128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_entry_ttl(env, &key);
    }
}

pub fn is_blacklisted(env: &Env, id: &Address) -> bool {
    let key = DataKey::Blacklisted(id.clone());
    env.storage().persistent().has(&key)
}

pub fn set_blacklisted(env: &Env, id: &Address, blacklisted: bool) {
    let key = DataKey::Blacklisted(id.clone());
    if blacklisted {
        env.storage().persistent().set(&key, &true);
        extend_entry_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}
