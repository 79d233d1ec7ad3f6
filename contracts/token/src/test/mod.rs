#![cfg(test)]

// ---------------------------------------------------------------------------
// Token test suite
//
// Structure
// ─────────
// math       : pure checked-arithmetic helpers (no Env needed)
// ledger     : mint / transfer / burn and the supply cap
// allowance  : approve / transfer_from / burn_from
// access     : initialization, ownership and the pause gate
// blacklist  : registry membership and forced burns
// migration  : agent wiring and balance migration
// events     : emission contract, topic layout and ordering
// invariants : conservation across mixed operation sequences
// ---------------------------------------------------------------------------

mod ledger;

use soroban_sdk::{
    testutils::{Address as _, Events as _},
    Address, Env, String, Val, Vec,
};

use crate::{Token, TokenClient};

pub const MAX_SUPPLY: u128 = 5_000_000_000_000_000_000_000_000_000;
pub const TRANSFER_FUNDS: u128 = 1_000;
pub const ALLOWED_AMOUNT: u128 = 200;

pub struct Setup<'a> {
    pub env: Env,
    pub token: Address,
    pub client: TokenClient<'a>,
    pub owner: Address,
    pub holder1: Address,
    pub holder2: Address,
    pub holder3: Address,
    pub holder4: Address,
}

impl<'a> Setup<'a> {
    /// Freshly initialized token with zero supply.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let token = env.register_contract(None, Token);
        let client = TokenClient::new(&env, &token);

        let owner = Address::generate(&env);
        let holder1 = Address::generate(&env);
        let holder2 = Address::generate(&env);
        let holder3 = Address::generate(&env);
        let holder4 = Address::generate(&env);

        client.initialize(
            &owner,
            &String::from_str(&env, "CannDollar"),
            &String::from_str(&env, "CDAG"),
            &MAX_SUPPLY,
        );

        Setup {
            env,
            token,
            client,
            owner,
            holder1,
            holder2,
            holder3,
            holder4,
        }
    }

    /// Owner mints `TRANSFER_FUNDS` and hands all of it to holder1.
    pub fn funded() -> Self {
        let setup = Self::new();
        setup.client.mint(&setup.owner, &setup.owner, &TRANSFER_FUNDS);
        setup
            .client
            .transfer(&setup.owner, &setup.holder1, &TRANSFER_FUNDS);
        setup
    }

    pub fn holders(&self) -> [Address; 5] {
        [
            self.owner.clone(),
            self.holder1.clone(),
            self.holder2.clone(),
            self.holder3.clone(),
            self.holder4.clone(),
        ]
    }

    /// `sum(balances) == total_supply <= max_supply` over every known holder.
    pub fn assert_conserved(&self) {
        let sum: u128 = self
            .holders()
            .iter()
            .map(|h| self.client.balance(h))
            .sum();
        let total = self.client.total_supply();
        assert_eq!(sum, total, "balances must sum to total supply");
        assert!(total <= self.client.max_supply(), "supply above cap");
    }
}

/// The final `n` events published in the environment.
pub fn last_events(env: &Env, n: u32) -> Vec<(Address, Vec<Val>, Val)> {
    let all = env.events().all();
    assert!(all.len() >= n, "expected at least {} events, got {}", n, all.len());
    all.slice(all.len() - n..)
}
