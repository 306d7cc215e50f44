#![cfg(test)]

use crate::access::SEND_COMMANDS_SIG;
use crate::test_helpers::{commands, setup, MockOracle, CHAIN};
use crate::{OmnichainController, OmnichainControllerClient};
use relay_errors::{null_address, ContractError};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{Address, Env, IntoVal, String, Symbol};

// ---------------------------------------------------------------------------
// Initialization
// ---------------------------------------------------------------------------

#[test]
fn test_initialize() {
    let e = Env::default();
    let s = setup(&e);
    assert_eq!(s.client.get_owner(), s.owner);
    assert_eq!(s.client.get_access_control_manager(), s.oracle.address);
    assert!(!s.client.is_paused());
    assert_eq!(s.client.get_pending_owner(), None);
}

#[test]
fn test_initialize_twice_fails() {
    let e = Env::default();
    let s = setup(&e);
    assert_eq!(
        s.client.try_initialize(&s.owner, &s.oracle.address),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}

#[test]
fn test_initialize_rejects_null_manager() {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(OmnichainController, ());
    let client = OmnichainControllerClient::new(&e, &contract_id);
    let owner = Address::generate(&e);
    assert_eq!(
        client.try_initialize(&owner, &null_address(&e)),
        Err(Ok(ContractError::NullAddress))
    );
}

// ---------------------------------------------------------------------------
// Access gate
// ---------------------------------------------------------------------------

#[test]
fn test_set_limit_requires_permission() {
    let e = Env::default();
    let s = setup(&e);
    let stranger = Address::generate(&e);
    assert_eq!(
        s.client.try_set_max_daily_limit(&stranger, &CHAIN, &10),
        Err(Ok(ContractError::AccessDenied))
    );
    assert_eq!(s.client.get_max_daily_limit(&CHAIN), 0);
}

#[test]
fn test_send_requires_permission() {
    let e = Env::default();
    let s = setup(&e);
    s.client.set_max_daily_limit(&s.operator, &CHAIN, &10);
    let stranger = Address::generate(&e);
    assert_eq!(
        s.client.try_send_commands(&stranger, &CHAIN, &commands(&e, 1)),
        Err(Ok(ContractError::AccessDenied))
    );
    assert_eq!(
        s.client.get_destination_state(&CHAIN).commands_sent_in_window,
        0
    );
}

#[test]
fn test_revoked_permission_denies_immediately() {
    let e = Env::default();
    let s = setup(&e);
    s.client.set_max_daily_limit(&s.operator, &CHAIN, &10);
    s.client.send_commands(&s.operator, &CHAIN, &commands(&e, 1));

    s.oracle.set_allowed(
        &s.operator,
        &s.client.address,
        &String::from_str(&e, SEND_COMMANDS_SIG),
        &false,
    );
    assert_eq!(
        s.client
            .try_send_commands(&s.operator, &CHAIN, &commands(&e, 1)),
        Err(Ok(ContractError::AccessDenied))
    );
}

#[test]
#[should_panic]
fn test_access_gate_requires_caller_auth() {
    let e = Env::default();
    let s = setup(&e);
    e.mock_auths(&[]);
    s.client.pause(&s.operator);
}

// ---------------------------------------------------------------------------
// Command sending
// ---------------------------------------------------------------------------

#[test]
fn test_send_commands_returns_sequential_nonces() {
    let e = Env::default();
    let s = setup(&e);
    s.client.set_max_daily_limit(&s.operator, &CHAIN, &10);
    assert_eq!(s.client.send_commands(&s.operator, &CHAIN, &commands(&e, 1)), 0);
    assert_eq!(s.client.send_commands(&s.operator, &CHAIN, &commands(&e, 2)), 1);
}

#[test]
fn test_send_commands_emits_event() {
    let e = Env::default();
    let s = setup(&e);
    s.client.set_max_daily_limit(&s.operator, &CHAIN, &10);
    let batch = commands(&e, 3);
    s.client.send_commands(&s.operator, &CHAIN, &batch);

    let (emitter, topics, data) = e.events().all().last().unwrap();
    assert_eq!(emitter, s.client.address);
    let name: Symbol = topics.get(0).unwrap().into_val(&e);
    assert_eq!(name, Symbol::new(&e, "commands_sent"));
    let chain: u32 = topics.get(1).unwrap().into_val(&e);
    assert_eq!(chain, CHAIN);
    let (sender, sent): (Address, soroban_sdk::Vec<soroban_sdk::Bytes>) = data.into_val(&e);
    assert_eq!(sender, s.operator);
    assert_eq!(sent, batch);
}

// ---------------------------------------------------------------------------
// Owner-gated configuration
// ---------------------------------------------------------------------------

#[test]
fn test_owner_rotates_access_control_manager() {
    let e = Env::default();
    let s = setup(&e);
    let new_oracle = e.register(MockOracle, ());

    s.client.set_access_control_manager(&s.owner, &new_oracle);
    assert_eq!(s.client.get_access_control_manager(), new_oracle);

    // the new oracle knows nobody yet
    assert_eq!(
        s.client.try_pause(&s.operator),
        Err(Ok(ContractError::AccessDenied))
    );
}

#[test]
fn test_rotation_emits_old_and_new_manager() {
    let e = Env::default();
    let s = setup(&e);
    let new_oracle = e.register(MockOracle, ());
    s.client.set_access_control_manager(&s.owner, &new_oracle);

    let (_, topics, _) = e.events().all().last().unwrap();
    let name: Symbol = topics.get(0).unwrap().into_val(&e);
    let old: Address = topics.get(1).unwrap().into_val(&e);
    let new: Address = topics.get(2).unwrap().into_val(&e);
    assert_eq!(name, Symbol::new(&e, "new_access_control_manager"));
    assert_eq!(old, s.oracle.address);
    assert_eq!(new, new_oracle);
}

#[test]
fn test_rotation_is_owner_only() {
    let e = Env::default();
    let s = setup(&e);
    let new_oracle = e.register(MockOracle, ());
    // operator holds every oracle permission but is not the owner
    assert_eq!(
        s.client
            .try_set_access_control_manager(&s.operator, &new_oracle),
        Err(Ok(ContractError::NotOwner))
    );
}

#[test]
fn test_rotation_rejects_null_manager() {
    let e = Env::default();
    let s = setup(&e);
    assert_eq!(
        s.client
            .try_set_access_control_manager(&s.owner, &null_address(&e)),
        Err(Ok(ContractError::NullAddress))
    );
    assert_eq!(s.client.get_access_control_manager(), s.oracle.address);
}

#[test]
fn test_two_step_ownership_transfer() {
    let e = Env::default();
    let s = setup(&e);
    let next = Address::generate(&e);

    s.client.transfer_ownership(&s.owner, &next);
    assert_eq!(s.client.get_pending_owner(), Some(next.clone()));
    assert_eq!(s.client.get_owner(), s.owner);

    let stranger = Address::generate(&e);
    assert_eq!(
        s.client.try_accept_ownership(&stranger),
        Err(Ok(ContractError::NotPendingOwner))
    );

    s.client.accept_ownership(&next);
    assert_eq!(s.client.get_owner(), next);
    assert_eq!(s.client.get_pending_owner(), None);

    assert_eq!(
        s.client.try_transfer_ownership(&s.owner, &stranger),
        Err(Ok(ContractError::NotOwner))
    );
}

#[test]
fn test_renounce_ownership_is_noop() {
    let e = Env::default();
    let s = setup(&e);
    s.client.renounce_ownership();
    assert_eq!(s.client.get_owner(), s.owner);
}
