use soroban_sdk::{symbol_short, Address, Env, Symbol};

/// Ordered notification sink for indexers.
///
/// Every helper publishes exactly one event. Callers invoke them only after
/// all writes of an operation have been made, so a rejected operation never
/// emits anything.
pub struct TokenEvents;

impl TokenEvents {
    /// Topics: `("transfer", from, to)`
    /// Data:   `amount`
    ///
    /// Mints use the zero address as `from`; burns use it as `to`.
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: u128) {
        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
    }

    /// Topics: `("approve", owner, spender)`
    /// Data:   `amount` (the allowance value after the operation)
    pub fn approval(env: &Env, owner: &Address, spender: &Address, amount: u128) {
        env.events()
            .publish((symbol_short!("approve"), owner, spender), amount);
    }

    pub fn paused(env: &Env, account: &Address) {
        env.events().publish((symbol_short!("paused"),), account);
    }

    pub fn unpaused(env: &Env, account: &Address) {
        env.events().publish((symbol_short!("unpaused"),), account);
    }

    /// "ownership_transferred" exceeds the 9-char symbol_short! limit.
    pub fn ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
        env.events().publish(
            (
                Symbol::new(env, "ownership_transferred"),
                previous_owner,
                new_owner,
            ),
            (),
        );
    }

    pub fn added_black_list(env: &Env, user: &Address) {
        env.events()
            .publish((Symbol::new(env, "added_black_list"),), user);
    }

    pub fn removed_black_list(env: &Env, user: &Address) {
        env.events()
            .publish((Symbol::new(env, "removed_black_list"),), user);
    }

    pub fn blacklisted_funds_burned(env: &Env, user: &Address, amount: u128) {
        env.events().publish(
            (Symbol::new(env, "blacklisted_funds_burned"), user),
            amount,
        );
    }

    /// Topics: `("migrate", from, agent)`
    /// Data:   `amount`
    pub fn migrate(env: &Env, from: &Address, agent: &Address, amount: u128) {
        env.events()
            .publish((symbol_short!("migrate"), from, agent), amount);
    }
}
