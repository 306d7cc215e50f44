#![no_std]

//! # Omnichain Controller
//!
//! Admission gate for commands relayed to remote chains. A command batch is
//! sent only when the caller is allowed by the access control manager, the
//! controller is not paused, and the destination's rolling 24 hour quota has
//! room for every command in the batch.
//!
//! ## Storage Layout
//!
//! | Key                              | Tier           |
//! |----------------------------------|----------------|
//! | `DataKey::Owner`                 | `instance()`   |
//! | `DataKey::PendingOwner`          | `instance()`   |
//! | `DataKey::AccessControlManager`  | `instance()`   |
//! | `DataKey::Paused`                | `instance()`   |
//! | `DataKey::SendNonce`             | `instance()`   |
//! | `DataKey::Destination(chain_id)` | `persistent()` |

pub mod access;
mod events;
pub mod pausable;
pub mod rate_limit;

use relay_errors::{require_non_null, ContractError};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, Env, Vec};

pub use rate_limit::{DestinationState, WINDOW_SECONDS};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Single privileged account allowed to rotate the access control manager.
    Owner,
    /// Proposed owner awaiting `accept_ownership`.
    PendingOwner,
    /// Oracle consulted for every access-gated operation.
    AccessControlManager,
    /// Pause flag; absent means active.
    Paused,
    /// Counter for command batch nonces.
    SendNonce,
    /// Rate limit record per destination chain id.
    Destination(u32),
}

#[contract]
pub struct OmnichainController;

#[contractimpl]
impl OmnichainController {
    /// Initialize the controller.
    ///
    /// # Arguments
    /// * `owner` - Account allowed to rotate the access control manager
    /// * `access_control_manager` - Oracle consulted by access-gated operations
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called twice
    /// * `NullAddress` - either argument is the null account
    pub fn initialize(
        e: Env,
        owner: Address,
        access_control_manager: Address,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Owner) {
            return Err(ContractError::AlreadyInitialized);
        }
        require_non_null(&e, &owner)?;
        require_non_null(&e, &access_control_manager)?;
        owner.require_auth();

        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage()
            .instance()
            .set(&DataKey::AccessControlManager, &access_control_manager);
        e.storage().instance().set(&DataKey::SendNonce, &0_u64);

        events::emit_initialized(&e, &owner, &access_control_manager);
        Ok(())
    }

    // ── Access-gated configuration ──────────────────────────────────────────

    /// Raise the daily command limit of `chain_id`.
    ///
    /// The new limit applies from the next admission; a window already above
    /// it stays over quota until it rotates.
    ///
    /// # Errors
    /// * `AccessDenied` - caller lacks `set_max_daily_limit(u32,u128)`
    /// * `InvalidChainId` - `chain_id` does not fit in 16 bits
    /// * `InvalidLimit` - `limit` is below the current limit
    pub fn set_max_daily_limit(
        e: Env,
        caller: Address,
        chain_id: u32,
        limit: u128,
    ) -> Result<(), ContractError> {
        access::authorize(&e, &caller, access::SET_MAX_DAILY_LIMIT_SIG)?;
        rate_limit::validate_chain_id(chain_id)?;

        let old_limit = rate_limit::set_max_daily_limit(&e, chain_id, limit)?;
        events::emit_set_max_daily_limit(&e, chain_id, old_limit, limit);
        Ok(())
    }

    /// Stop all command sending. Idempotent.
    pub fn pause(e: Env, caller: Address) -> Result<(), ContractError> {
        pausable::pause(&e, &caller)
    }

    /// Resume command sending. Idempotent.
    pub fn unpause(e: Env, caller: Address) -> Result<(), ContractError> {
        pausable::unpause(&e, &caller)
    }

    // ── Command sending ─────────────────────────────────────────────────────

    /// Send a batch of encoded commands to `chain_id`.
    ///
    /// Every command in the batch counts against the destination's quota.
    ///
    /// # Returns
    /// The batch nonce carried by the `commands_sent` event.
    ///
    /// # Errors
    /// * `AccessDenied` - caller lacks `send_commands(u32,Vec<Bytes>)`
    /// * `ControllerPaused` - the controller is paused
    /// * `InvalidChainId` - `chain_id` does not fit in 16 bits
    /// * `LimitExceeded` - the batch does not fit in the current window
    pub fn send_commands(
        e: Env,
        caller: Address,
        chain_id: u32,
        commands: Vec<Bytes>,
    ) -> Result<u64, ContractError> {
        access::authorize(&e, &caller, access::SEND_COMMANDS_SIG)?;
        Self::admit_commands(&e, chain_id, commands.len() as u128)?;

        let nonce: u64 = e
            .storage()
            .instance()
            .get(&DataKey::SendNonce)
            .unwrap_or(0);
        let next = nonce.checked_add(1).ok_or(ContractError::Overflow)?;
        e.storage().instance().set(&DataKey::SendNonce, &next);

        events::emit_commands_sent(&e, chain_id, nonce, &caller, &commands);
        Ok(nonce)
    }

    // ── Owner-gated configuration ───────────────────────────────────────────

    /// Point the controller at a new access control manager.
    ///
    /// # Errors
    /// * `NotOwner` - `caller` is not the owner
    /// * `NullAddress` - `new_manager` is the null account
    pub fn set_access_control_manager(
        e: Env,
        caller: Address,
        new_manager: Address,
    ) -> Result<(), ContractError> {
        Self::require_owner(&e, &caller)?;
        require_non_null(&e, &new_manager)?;

        let old_manager = access::get_access_control_manager(&e)?;
        e.storage()
            .instance()
            .set(&DataKey::AccessControlManager, &new_manager);

        events::emit_new_access_control_manager(&e, &old_manager, &new_manager);
        Ok(())
    }

    /// Start a two-step ownership transfer. Only the owner can call this.
    pub fn transfer_ownership(
        e: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_owner(&e, &caller)?;
        require_non_null(&e, &new_owner)?;

        e.storage().instance().set(&DataKey::PendingOwner, &new_owner);
        events::emit_ownership_transfer_started(&e, &caller, &new_owner);
        Ok(())
    }

    /// Complete an ownership transfer. Only the pending owner can call this.
    pub fn accept_ownership(e: Env, new_owner: Address) -> Result<(), ContractError> {
        new_owner.require_auth();
        let pending: Option<Address> = e.storage().instance().get(&DataKey::PendingOwner);
        if pending != Some(new_owner.clone()) {
            return Err(ContractError::NotPendingOwner);
        }

        let previous = Self::get_owner(e.clone())?;
        e.storage().instance().set(&DataKey::Owner, &new_owner);
        e.storage().instance().remove(&DataKey::PendingOwner);

        events::emit_ownership_transferred(&e, &previous, &new_owner);
        Ok(())
    }

    /// Ownership can never be renounced; this is a no-op.
    pub fn renounce_ownership(_e: Env) {}

    // ── Queries ─────────────────────────────────────────────────────────────

    pub fn get_owner(e: Env) -> Result<Address, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_pending_owner(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::PendingOwner)
    }

    pub fn get_access_control_manager(e: Env) -> Result<Address, ContractError> {
        access::get_access_control_manager(&e)
    }

    pub fn is_paused(e: Env) -> bool {
        pausable::is_paused(&e)
    }

    pub fn get_destination_state(e: Env, chain_id: u32) -> DestinationState {
        rate_limit::load(&e, chain_id)
    }

    pub fn get_max_daily_limit(e: Env, chain_id: u32) -> u128 {
        rate_limit::load(&e, chain_id).max_daily_limit
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    /// Admission path shared by every command-sending entry point.
    fn admit_commands(e: &Env, chain_id: u32, count: u128) -> Result<(), ContractError> {
        pausable::require_not_paused(e)?;
        rate_limit::validate_chain_id(chain_id)?;
        rate_limit::admit(e, chain_id, count)?;
        Ok(())
    }

    fn require_owner(e: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();
        let owner: Address = e
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != owner {
            return Err(ContractError::NotOwner);
        }
        Ok(())
    }
}


#[cfg(test)]
mod test_controller;
