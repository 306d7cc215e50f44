use relay_errors::ContractError;
use soroban_sdk::{Address, Env};

use crate::access::{self, PAUSE_SIG, UNPAUSE_SIG};
use crate::{events, DataKey};

pub fn is_paused(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn require_not_paused(e: &Env) -> Result<(), ContractError> {
    if is_paused(e) {
        return Err(ContractError::ControllerPaused);
    }
    Ok(())
}

/// Pausing an already paused controller succeeds without changing state.
pub fn pause(e: &Env, caller: &Address) -> Result<(), ContractError> {
    access::authorize(e, caller, PAUSE_SIG)?;
    if !is_paused(e) {
        e.storage().instance().set(&DataKey::Paused, &true);
    }
    events::emit_paused(e, caller);
    Ok(())
}

pub fn unpause(e: &Env, caller: &Address) -> Result<(), ContractError> {
    access::authorize(e, caller, UNPAUSE_SIG)?;
    if is_paused(e) {
        e.storage().instance().set(&DataKey::Paused, &false);
    }
    events::emit_unpaused(e, caller);
    Ok(())
}
