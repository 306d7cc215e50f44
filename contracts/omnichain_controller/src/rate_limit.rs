//! Per-destination rolling 24 hour command quota.
//!
//! Windows rotate lazily: the first admission more than `WINDOW_SECONDS`
//! after `window_start` opens a new window at the current ledger time.

use relay_errors::ContractError;
use soroban_sdk::{contracttype, Env};

use crate::DataKey;

/// Length of an accounting window in seconds.
pub const WINDOW_SECONDS: u64 = 86_400;

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

/// Accounting record for one destination chain.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DestinationState {
    /// Quota ceiling for a window.
    pub max_daily_limit: u128,
    /// Ledger timestamp at which the current window opened.
    pub window_start: u64,
    /// Commands admitted since `window_start`.
    pub commands_sent_in_window: u128,
}

pub fn validate_chain_id(chain_id: u32) -> Result<(), ContractError> {
    if chain_id > u16::MAX as u32 {
        return Err(ContractError::InvalidChainId);
    }
    Ok(())
}

pub fn load(e: &Env, chain_id: u32) -> DestinationState {
    let key = DataKey::Destination(chain_id);
    let storage = e.storage().persistent();
    match storage.get(&key) {
        Some(state) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            state
        }
        None => DestinationState::default(),
    }
}

fn save(e: &Env, chain_id: u32, state: &DestinationState) {
    let key = DataKey::Destination(chain_id);
    e.storage().persistent().set(&key, state);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// @notice Admits `count` commands for `chain_id` or rejects with
///         `LimitExceeded`, leaving the stored record untouched.
/// @return The committed destination record.
pub fn admit(e: &Env, chain_id: u32, count: u128) -> Result<DestinationState, ContractError> {
    let now = e.ledger().timestamp();
    let mut state = load(e, chain_id);

    let rotate = now.saturating_sub(state.window_start) > WINDOW_SECONDS;
    let sent = if rotate {
        count
    } else {
        state
            .commands_sent_in_window
            .checked_add(count)
            .ok_or(ContractError::Overflow)?
    };

    if sent > state.max_daily_limit {
        return Err(ContractError::LimitExceeded);
    }

    if rotate || count > 0 {
        if rotate {
            state.window_start = now;
        }
        state.commands_sent_in_window = sent;
        save(e, chain_id, &state);
    }
    Ok(state)
}

/// @notice Raises the daily limit of `chain_id`. Lowering is rejected.
/// @return The previous limit.
pub fn set_max_daily_limit(
    e: &Env,
    chain_id: u32,
    new_limit: u128,
) -> Result<u128, ContractError> {
    let mut state = load(e, chain_id);
    let old_limit = state.max_daily_limit;
    if new_limit < old_limit {
        return Err(ContractError::InvalidLimit);
    }
    state.max_daily_limit = new_limit;
    save(e, chain_id, &state);
    Ok(old_limit)
}
