use soroban_sdk::{testutils::Address as _, Address};

use super::{Setup, MAX_SUPPLY, TRANSFER_FUNDS};
use crate::{TokenError, ZERO_ADDRESS};

// ---------------------------------------------------------------------------
// mint
// ---------------------------------------------------------------------------

#[test]
fn mint_increases_balance_and_supply() {
    let setup = Setup::new();

    setup.client.mint(&setup.owner, &setup.owner, &TRANSFER_FUNDS);

    assert_eq!(setup.client.balance(&setup.owner), TRANSFER_FUNDS);
    assert_eq!(setup.client.total_supply(), TRANSFER_FUNDS);
}

#[test]
fn mint_by_non_owner_is_unauthorized() {
    let setup = Setup::new();

    let result = setup
        .client
        .try_mint(&setup.holder1, &setup.owner, &TRANSFER_FUNDS);
    assert_eq!(result, Err(Ok(TokenError::Unauthorized)));
    assert_eq!(setup.client.total_supply(), 0);
}

#[test]
fn mint_beyond_cap_is_rejected() {
    let setup = Setup::funded();

    // TRANSFER_FUNDS is already minted, so the full cap no longer fits.
    let result = setup.client.try_mint(&setup.owner, &setup.owner, &MAX_SUPPLY);
    assert_eq!(result, Err(Ok(TokenError::CapExceeded)));
    assert_eq!(setup.client.total_supply(), TRANSFER_FUNDS);
}

#[test]
fn mint_exactly_to_cap_succeeds() {
    let setup = Setup::funded();

    setup
        .client
        .mint(&setup.owner, &setup.holder2, &(MAX_SUPPLY - TRANSFER_FUNDS));

    assert_eq!(setup.client.total_supply(), MAX_SUPPLY);
    assert_eq!(
        setup.client.try_mint(&setup.owner, &setup.holder2, &1),
        Err(Ok(TokenError::CapExceeded))
    );
}

#[test]
fn mint_overflowing_supply_is_arithmetic_fault() {
    let setup = Setup::funded();

    let result = setup.client.try_mint(&setup.owner, &setup.holder2, &u128::MAX);
    assert_eq!(result, Err(Ok(TokenError::ArithmeticFault)));
}

#[test]
fn mint_to_blacklisted_is_rejected() {
    let setup = Setup::funded();
    setup.client.add_black_list(&setup.owner, &setup.holder1);

    let result = setup.client.try_mint(&setup.owner, &setup.holder1, &MAX_SUPPLY);
    assert_eq!(result, Err(Ok(TokenError::Blacklisted)));
}

#[test]
fn mint_to_self_or_zero_address_is_invalid_recipient() {
    let setup = Setup::new();
    let zero = Address::from_string(&soroban_sdk::String::from_str(&setup.env, ZERO_ADDRESS));

    assert_eq!(
        setup.client.try_mint(&setup.owner, &setup.token, &1),
        Err(Ok(TokenError::InvalidRecipient))
    );
    assert_eq!(
        setup.client.try_mint(&setup.owner, &zero, &1),
        Err(Ok(TokenError::InvalidRecipient))
    );
}

#[test]
fn mint_is_allowed_while_paused() {
    let setup = Setup::new();
    setup.client.pause(&setup.owner);

    setup.client.mint(&setup.owner, &setup.holder1, &TRANSFER_FUNDS);
    assert_eq!(setup.client.balance(&setup.holder1), TRANSFER_FUNDS);
}

// ---------------------------------------------------------------------------
// transfer
// ---------------------------------------------------------------------------

#[test]
fn transfer_moves_full_balance() {
    let setup = Setup::funded();

    assert_eq!(setup.client.balance(&setup.holder1), TRANSFER_FUNDS);
    assert_eq!(setup.client.balance(&setup.owner), 0);
    assert_eq!(setup.client.total_supply(), TRANSFER_FUNDS);
}

#[test]
fn transfer_chain_between_holders() {
    let setup = Setup::funded();

    setup
        .client
        .transfer(&setup.holder1, &setup.holder2, &TRANSFER_FUNDS);

    assert_eq!(setup.client.balance(&setup.holder2), TRANSFER_FUNDS);
    assert_eq!(setup.client.balance(&setup.holder1), 0);
}

#[test]
fn transfer_more_than_balance_is_rejected() {
    let setup = Setup::funded();

    let result = setup
        .client
        .try_transfer(&setup.holder1, &setup.holder2, &(TRANSFER_FUNDS + 1));
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(setup.client.balance(&setup.holder1), TRANSFER_FUNDS);
    assert_eq!(setup.client.balance(&setup.holder2), 0);
}

#[test]
fn transfer_to_token_contract_is_invalid_recipient() {
    let setup = Setup::funded();

    let result = setup
        .client
        .try_transfer(&setup.holder1, &setup.token, &TRANSFER_FUNDS);
    assert_eq!(result, Err(Ok(TokenError::InvalidRecipient)));
}

#[test]
fn transfer_to_self_keeps_balance() {
    let setup = Setup::funded();

    setup
        .client
        .transfer(&setup.holder1, &setup.holder1, &TRANSFER_FUNDS);
    assert_eq!(setup.client.balance(&setup.holder1), TRANSFER_FUNDS);

    assert_eq!(
        setup
            .client
            .try_transfer(&setup.holder1, &setup.holder1, &(TRANSFER_FUNDS + 1)),
        Err(Ok(TokenError::InsufficientBalance))
    );
}

#[test]
fn transfer_to_blacklisted_is_rejected() {
    let setup = Setup::new();
    setup.client.mint(&setup.owner, &setup.owner, &TRANSFER_FUNDS);
    setup.client.add_black_list(&setup.owner, &setup.holder1);

    let result = setup
        .client
        .try_transfer(&setup.owner, &setup.holder1, &TRANSFER_FUNDS);
    assert_eq!(result, Err(Ok(TokenError::Blacklisted)));
    assert_eq!(setup.client.balance(&setup.owner), TRANSFER_FUNDS);
}

#[test]
fn transfer_from_blacklisted_is_rejected() {
    let setup = Setup::funded();
    setup.client.add_black_list(&setup.owner, &setup.holder1);

    let result = setup
        .client
        .try_transfer(&setup.holder1, &setup.holder2, &TRANSFER_FUNDS);
    assert_eq!(result, Err(Ok(TokenError::Blacklisted)));
}

#[test]
fn blacklist_is_checked_before_pause() {
    let setup = Setup::funded();
    setup.client.add_black_list(&setup.owner, &setup.holder1);
    setup.client.pause(&setup.owner);

    let result = setup
        .client
        .try_transfer(&setup.holder1, &setup.holder2, &TRANSFER_FUNDS);
    assert_eq!(result, Err(Ok(TokenError::Blacklisted)));
}

#[test]
fn pause_is_checked_before_balance() {
    let setup = Setup::funded();
    setup.client.pause(&setup.owner);

    let result = setup
        .client
        .try_transfer(&setup.holder1, &setup.holder2, &(TRANSFER_FUNDS * 5));
    assert_eq!(result, Err(Ok(TokenError::Paused)));
}

#[test]
fn zero_amount_transfer_succeeds() {
    let setup = Setup::new();
    let stranger = Address::generate(&setup.env);

    setup.client.transfer(&stranger, &setup.holder1, &0);
    assert_eq!(setup.client.balance(&setup.holder1), 0);
}

// ---------------------------------------------------------------------------
// burn
// ---------------------------------------------------------------------------

#[test]
fn burn_reduces_balance_and_supply() {
    let setup = Setup::funded();
    setup.client.mint(&setup.owner, &setup.owner, &TRANSFER_FUNDS);
    assert_eq!(setup.client.balance(&setup.owner), TRANSFER_FUNDS);

    setup.client.burn(&setup.owner, &TRANSFER_FUNDS);

    assert_eq!(setup.client.balance(&setup.owner), 0);
    assert_eq!(setup.client.total_supply(), TRANSFER_FUNDS);
}

#[test]
fn burn_more_than_balance_is_rejected() {
    let setup = Setup::funded();
    setup.client.mint(&setup.owner, &setup.owner, &TRANSFER_FUNDS);

    let result = setup.client.try_burn(&setup.owner, &(TRANSFER_FUNDS + 1));
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
    assert_eq!(setup.client.total_supply(), TRANSFER_FUNDS * 2);
}

#[test]
fn burn_with_empty_balance_is_rejected() {
    let setup = Setup::funded();

    let result = setup.client.try_burn(&setup.owner, &TRANSFER_FUNDS);
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
}

#[test]
fn burn_frees_room_under_cap() {
    let setup = Setup::new();
    setup.client.mint(&setup.owner, &setup.holder1, &MAX_SUPPLY);
    setup.client.burn(&setup.holder1, &TRANSFER_FUNDS);

    setup.client.mint(&setup.owner, &setup.holder2, &TRANSFER_FUNDS);
    assert_eq!(setup.client.total_supply(), MAX_SUPPLY);
}

#[test]
fn burn_is_allowed_while_paused() {
    let setup = Setup::funded();
    setup.client.pause(&setup.owner);

    setup.client.burn(&setup.holder1, &TRANSFER_FUNDS);
    assert_eq!(setup.client.total_supply(), 0);
}
