use soroban_sdk::{Address, Bytes, Env, Symbol, Vec};

/// Emitted once when the controller is initialized.
///
/// # Topics
/// * `Symbol` - "controller_initialized"
///
/// # Data
/// * `Address` - The owner
/// * `Address` - The access control manager
pub fn emit_initialized(e: &Env, owner: &Address, access_control_manager: &Address) {
    let topics = (Symbol::new(e, "controller_initialized"),);
    e.events().publish(topics, (owner.clone(), access_control_manager.clone()));
}

/// Emitted when the daily command limit of a destination changes.
///
/// # Topics
/// * `Symbol` - "set_max_daily_limit"
/// * `u32` - The destination chain id
///
/// # Data
/// * `u128` - The previous limit
/// * `u128` - The new limit
pub fn emit_set_max_daily_limit(e: &Env, chain_id: u32, old_limit: u128, new_limit: u128) {
    let topics = (Symbol::new(e, "set_max_daily_limit"), chain_id);
    e.events().publish(topics, (old_limit, new_limit));
}

/// Emitted when the owner points the controller at a new access control manager.
///
/// # Topics
/// * `Symbol` - "new_access_control_manager"
/// * `Address` - The previous manager
/// * `Address` - The new manager
pub fn emit_new_access_control_manager(e: &Env, old_manager: &Address, new_manager: &Address) {
    let topics = (
        Symbol::new(e, "new_access_control_manager"),
        old_manager.clone(),
        new_manager.clone(),
    );
    e.events().publish(topics, ());
}

pub fn emit_paused(e: &Env, caller: &Address) {
    e.events().publish((Symbol::new(e, "paused"),), caller.clone());
}

pub fn emit_unpaused(e: &Env, caller: &Address) {
    e.events().publish((Symbol::new(e, "unpaused"),), caller.clone());
}

/// Emitted for every admitted command batch. Off-chain relayers deliver
/// `commands` to the destination chain.
///
/// # Topics
/// * `Symbol` - "commands_sent"
/// * `u32` - The destination chain id
/// * `u64` - Per-controller batch nonce
///
/// # Data
/// * `Address` - The sender
/// * `Vec<Bytes>` - The encoded commands
pub fn emit_commands_sent(
    e: &Env,
    chain_id: u32,
    nonce: u64,
    sender: &Address,
    commands: &Vec<Bytes>,
) {
    let topics = (Symbol::new(e, "commands_sent"), chain_id, nonce);
    e.events().publish(topics, (sender.clone(), commands.clone()));
}

pub fn emit_ownership_transfer_started(e: &Env, owner: &Address, pending_owner: &Address) {
    let topics = (
        Symbol::new(e, "ownership_transfer_started"),
        owner.clone(),
        pending_owner.clone(),
    );
    e.events().publish(topics, ());
}

pub fn emit_ownership_transferred(e: &Env, previous_owner: &Address, new_owner: &Address) {
    let topics = (
        Symbol::new(e, "ownership_transferred"),
        previous_owner.clone(),
        new_owner.clone(),
    );
    e.events().publish(topics, ());
}
