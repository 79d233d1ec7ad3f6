#![no_std]

use soroban_sdk::{contractclient, Address, Env};

/// Migration Agent Interface.
/// A successor ledger that accepts balances moved out of the token must
/// implement this trait. The token invokes `migrate_from` once per
/// `migrate` call, after the holder's balance has already been burned.
/// The agent is expected to credit `amount` to `from` on its own ledger;
/// panicking here aborts the whole migration.
#[contractclient(name = "MigrationAgentClient")]
pub trait MigrationAgent {
    fn migrate_from(env: Env, from: Address, amount: u128);
}
