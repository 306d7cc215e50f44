//! # Relay Timelock Contract
//!
//! Privileged calls are queued by the admin with an `eta` at least `delay`
//! seconds in the future, and may be executed only between `eta` and
//! `eta + grace_period`. The timelock's own delay and admin succession are
//! changed by executing transactions that target the timelock itself.
//!
//! ## Storage Layout
//!
//! | Key                     | Tier           |
//! |-------------------------|----------------|
//! | `DataKey::Admin`        | `instance()`   |
//! | `DataKey::PendingAdmin` | `instance()`   |
//! | `DataKey::Delay`        | `instance()`   |
//! | `DataKey::Bounds`       | `instance()`   |
//! | `DataKey::ValueToken`   | `instance()`   |
//! | `DataKey::Executing`    | `instance()`   |
//! | `DataKey::Queued(hash)` | `persistent()` |

use relay_errors::{require_non_null, ContractError};
use soroban_sdk::token::TokenClient;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{
    contract, contractimpl, contracttype, Address, Bytes, BytesN, Env, IntoVal, String, Val,
};

use crate::events::{self, TransactionFields};
use crate::payload::{self, Call};
use crate::self_call::{self, SelfCall, SelfCallToken};

/// Window after `eta` during which a queued transaction stays executable.
pub const GRACE_PERIOD: u64 = 14 * 86_400;
/// Lowest accepted delay.
pub const MINIMUM_DELAY: u64 = 3_600;
/// Highest accepted delay.
pub const MAXIMUM_DELAY: u64 = 30 * 86_400;

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

/// Deployment-time timing policy. Fixed once the timelock is initialized.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimelockBounds {
    /// Seconds after `eta` during which execution is allowed.
    pub grace_period: u64,
    /// Lowest delay `set_delay` accepts.
    pub minimum_delay: u64,
    /// Highest delay `set_delay` accepts.
    pub maximum_delay: u64,
}

impl Default for TimelockBounds {
    fn default() -> Self {
        Self {
            grace_period: GRACE_PERIOD,
            minimum_delay: MINIMUM_DELAY,
            maximum_delay: MAXIMUM_DELAY,
        }
    }
}

impl TimelockBounds {
    pub fn check_delay(&self, delay: u64) -> Result<(), ContractError> {
        if delay < self.minimum_delay || delay > self.maximum_delay {
            return Err(ContractError::DelayOutOfBounds);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ContractError> {
        if self.grace_period == 0 || self.minimum_delay > self.maximum_delay {
            return Err(ContractError::DelayOutOfBounds);
        }
        Ok(())
    }
}

/// Result of executing a queued transaction. Either way the hash is consumed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExecutionOutcome {
    /// The call returned; carries the XDR of its return value.
    Succeeded(Bytes),
    /// The call failed; carries the error code.
    Reverted(u32),
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Account allowed to queue, cancel and execute transactions.
    Admin,
    /// Proposed successor awaiting `accept_admin`.
    PendingAdmin,
    /// Minimum seconds between queueing and `eta`.
    Delay,
    /// Grace period and delay bounds.
    Bounds,
    /// Token used to pay a transaction's `value`.
    ValueToken,
    /// Set while an executed transaction's call is in flight.
    Executing,
    /// Membership of a queued transaction hash.
    Queued(BytesN<32>),
}

pub(crate) fn load_bounds(e: &Env) -> Result<TimelockBounds, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Bounds)
        .ok_or(ContractError::NotInitialized)
}

#[contract]
pub struct Timelock;

#[contractimpl]
impl Timelock {
    /// Initialize the timelock with the default grace period and delay bounds.
    ///
    /// @param e           The contract environment
    /// @param admin       Address that queues, cancels and executes transactions
    /// @param delay       Initial delay in seconds
    /// @param value_token Token paying transaction values, if any
    pub fn initialize(
        e: Env,
        admin: Address,
        delay: u64,
        value_token: Option<Address>,
    ) -> Result<(), ContractError> {
        Self::initialize_with_bounds(e, admin, delay, TimelockBounds::default(), value_token)
    }

    /// Initialize the timelock with a custom grace period and delay bounds.
    pub fn initialize_with_bounds(
        e: Env,
        admin: Address,
        delay: u64,
        bounds: TimelockBounds,
        value_token: Option<Address>,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        require_non_null(&e, &admin)?;
        bounds.validate()?;
        bounds.check_delay(delay)?;

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Delay, &delay);
        e.storage().instance().set(&DataKey::Bounds, &bounds);
        if let Some(token) = value_token {
            e.storage().instance().set(&DataKey::ValueToken, &token);
        }

        events::emit_initialized(&e, &admin, delay);
        Ok(())
    }

    // ── Queue lifecycle ─────────────────────────────────────────────────────

    /// Queue a transaction. Only the admin can queue.
    ///
    /// Queueing an identical tuple twice leaves a single queued entry.
    ///
    /// @return The transaction hash
    ///
    /// # Errors
    /// * `NotAdmin` - caller is not the admin
    /// * `InvalidValue` - `value` is negative
    /// * `InvalidSignature` - `signature` is not a valid selector
    /// * `InvalidPayload` - `data` does not decode into call arguments
    /// * `EtaTooSoon` - `eta < now + delay`
    pub fn queue_transaction(
        e: Env,
        caller: Address,
        target: Address,
        value: i128,
        signature: String,
        data: Bytes,
        eta: u64,
    ) -> Result<BytesN<32>, ContractError> {
        Self::require_admin(&e, &caller)?;
        if value < 0 {
            return Err(ContractError::InvalidValue);
        }
        payload::build_call(&e, &signature, &data)?;

        let delay = Self::get_delay(e.clone())?;
        let earliest = e
            .ledger()
            .timestamp()
            .checked_add(delay)
            .ok_or(ContractError::Overflow)?;
        if eta < earliest {
            return Err(ContractError::EtaTooSoon);
        }

        let hash = payload::transaction_hash(&e, &target, value, &signature, &data, eta);
        let key = DataKey::Queued(hash.clone());
        e.storage().persistent().set(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);

        events::emit_queue_transaction(
            &e,
            &TransactionFields {
                hash: &hash,
                target: &target,
                value,
                signature: &signature,
                data: &data,
                eta,
            },
        );
        Ok(hash)
    }

    /// Cancel a queued transaction. Cancelling an unknown tuple is not an error.
    pub fn cancel_transaction(
        e: Env,
        caller: Address,
        target: Address,
        value: i128,
        signature: String,
        data: Bytes,
        eta: u64,
    ) -> Result<(), ContractError> {
        Self::require_admin(&e, &caller)?;

        let hash = payload::transaction_hash(&e, &target, value, &signature, &data, eta);
        e.storage().persistent().remove(&DataKey::Queued(hash.clone()));

        events::emit_cancel_transaction(
            &e,
            &TransactionFields {
                hash: &hash,
                target: &target,
                value,
                signature: &signature,
                data: &data,
                eta,
            },
        );
        Ok(())
    }

    /// Execute a queued transaction between its `eta` and `eta + grace_period`.
    ///
    /// The hash is removed from the queue before the call is made. A failed
    /// call is reported as `ExecutionOutcome::Reverted` and the hash stays
    /// consumed; the admin must queue the transaction again to retry.
    /// `value` is paid to the target in `value_token` once the call returns;
    /// if the payment fails the whole execution fails with `ExecutionReverted`
    /// and nothing is consumed.
    ///
    /// # Errors
    /// * `NotAdmin` - caller is not the admin
    /// * `ReentrancyDetected` - an execution is already in flight
    /// * `NotQueued` - the tuple is not queued
    /// * `TooEarly` - `now < eta`
    /// * `Expired` - `now > eta + grace_period`
    /// * `InvalidSignature` / `InvalidPayload` - the call cannot be built
    /// * `ValueTokenNotSet` - `value > 0` with no value token configured
    pub fn execute_transaction(
        e: Env,
        caller: Address,
        target: Address,
        value: i128,
        signature: String,
        data: Bytes,
        eta: u64,
    ) -> Result<ExecutionOutcome, ContractError> {
        Self::require_admin(&e, &caller)?;
        if e.storage().instance().has(&DataKey::Executing) {
            return Err(ContractError::ReentrancyDetected);
        }

        let hash = payload::transaction_hash(&e, &target, value, &signature, &data, eta);
        let key = DataKey::Queued(hash.clone());
        if !e.storage().persistent().has(&key) {
            return Err(ContractError::NotQueued);
        }

        let now = e.ledger().timestamp();
        if now < eta {
            return Err(ContractError::TooEarly);
        }
        let bounds = load_bounds(&e)?;
        if now > eta.saturating_add(bounds.grace_period) {
            return Err(ContractError::Expired);
        }

        let call = payload::build_call(&e, &signature, &data)?;
        let is_self = target == e.current_contract_address();
        let value_token = if value > 0 && !is_self {
            Some(Self::get_value_token(e.clone()).ok_or(ContractError::ValueTokenNotSet)?)
        } else {
            None
        };

        // Consumed before the call; never restored.
        e.storage().persistent().remove(&key);
        e.storage().instance().set(&DataKey::Executing, &true);

        let result = if is_self {
            Self::call_self(&e, &call)
        } else {
            Self::call_external(&e, &target, call)
        };

        e.storage().instance().remove(&DataKey::Executing);

        // A failed payment aborts the whole execution, call effects included.
        if let (Ok(_), Some(token)) = (&result, &value_token) {
            Self::pay_value(&e, token, &target, value)?;
        }

        let tx = TransactionFields {
            hash: &hash,
            target: &target,
            value,
            signature: &signature,
            data: &data,
            eta,
        };
        let outcome = match result {
            Ok(return_data) => {
                events::emit_execute_transaction(&e, &tx, &return_data);
                ExecutionOutcome::Succeeded(return_data)
            }
            Err(err) => {
                let code = err as u32;
                events::emit_execution_reverted(&e, &hash, &target, code);
                ExecutionOutcome::Reverted(code)
            }
        };
        Ok(outcome)
    }

    // ── Self-administration ─────────────────────────────────────────────────

    /// Change the delay. Reachable only by executing a queued transaction
    /// that targets this contract with signature `set_delay(u64)`; direct
    /// calls are always rejected.
    pub fn set_delay(_e: Env, _delay: u64) -> Result<(), ContractError> {
        Err(ContractError::NotSelfCall)
    }

    /// Propose a new admin. Reachable only by executing a queued transaction
    /// that targets this contract with signature `set_pending_admin(Address)`;
    /// direct calls are always rejected.
    pub fn set_pending_admin(_e: Env, _candidate: Address) -> Result<(), ContractError> {
        Err(ContractError::NotSelfCall)
    }

    /// Complete admin succession. Only the pending admin can call this.
    pub fn accept_admin(e: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        let pending: Option<Address> = e.storage().instance().get(&DataKey::PendingAdmin);
        if pending != Some(caller.clone()) {
            return Err(ContractError::NotPendingAdmin);
        }

        e.storage().instance().set(&DataKey::Admin, &caller);
        e.storage().instance().remove(&DataKey::PendingAdmin);

        events::emit_new_admin(&e, &caller);
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_pending_admin(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::PendingAdmin)
    }

    pub fn get_delay(e: Env) -> Result<u64, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Delay)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_bounds(e: Env) -> Result<TimelockBounds, ContractError> {
        load_bounds(&e)
    }

    pub fn get_grace_period(e: Env) -> Result<u64, ContractError> {
        Ok(load_bounds(&e)?.grace_period)
    }

    pub fn get_minimum_delay(e: Env) -> Result<u64, ContractError> {
        Ok(load_bounds(&e)?.minimum_delay)
    }

    pub fn get_maximum_delay(e: Env) -> Result<u64, ContractError> {
        Ok(load_bounds(&e)?.maximum_delay)
    }

    pub fn get_value_token(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::ValueToken)
    }

    pub fn is_queued(e: Env, hash: BytesN<32>) -> bool {
        e.storage().persistent().has(&DataKey::Queued(hash))
    }

    pub fn get_transaction_hash(
        e: Env,
        target: Address,
        value: i128,
        signature: String,
        data: Bytes,
        eta: u64,
    ) -> BytesN<32> {
        payload::transaction_hash(&e, &target, value, &signature, &data, eta)
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();
        let admin = Self::get_admin(e.clone())?;
        if *caller != admin {
            return Err(ContractError::NotAdmin);
        }
        Ok(())
    }

    fn call_self(e: &Env, call: &Call) -> Result<Bytes, ContractError> {
        let privileged = SelfCall::decode(e, call)?;
        self_call::dispatch(e, SelfCallToken::for_execution(), privileged)?;
        let unit: Val = ().into_val(e);
        Ok(unit.to_xdr(e))
    }

    fn call_external(e: &Env, target: &Address, call: Call) -> Result<Bytes, ContractError> {
        match e.try_invoke_contract::<Val, ContractError>(target, &call.function, call.args) {
            Ok(Ok(returned)) => Ok(returned.to_xdr(e)),
            _ => Err(ContractError::ExecutionReverted),
        }
    }

    fn pay_value(
        e: &Env,
        token: &Address,
        target: &Address,
        value: i128,
    ) -> Result<(), ContractError> {
        let paid =
            TokenClient::new(e, token).try_transfer(&e.current_contract_address(), target, &value);
        if !matches!(paid, Ok(Ok(()))) {
            return Err(ContractError::ExecutionReverted);
        }
        Ok(())
    }
}
