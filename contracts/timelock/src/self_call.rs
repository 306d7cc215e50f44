//! Privileged calls the timelock makes on itself.
//!
//! `set_delay` and `set_pending_admin` may only run as the effect of an
//! executed transaction targeting the timelock. The handlers demand a
//! `SelfCallToken`, which only the execution path constructs.

use relay_errors::{require_non_null, ContractError};
use soroban_sdk::{Address, Env, Symbol, TryFromVal, Val};

use crate::events;
use crate::payload::Call;
use crate::timelock::{self, DataKey};

/// Capability proving the caller is the execution path of a queued transaction.
pub(crate) struct SelfCallToken {
    _private: (),
}

impl SelfCallToken {
    /// Only `Timelock::execute_transaction` calls this.
    pub(crate) fn for_execution() -> Self {
        Self { _private: () }
    }
}

pub(crate) enum SelfCall {
    SetDelay(u64),
    SetPendingAdmin(Address),
}

impl SelfCall {
    /// Maps a call on the timelock's own address to a privileged handler.
    /// Unknown functions revert like a missing entry point would.
    pub(crate) fn decode(e: &Env, call: &Call) -> Result<Self, ContractError> {
        if call.args.len() != 1 {
            return Err(ContractError::InvalidPayload);
        }
        let arg: Val = call.args.get(0).ok_or(ContractError::InvalidPayload)?;

        if call.function == Symbol::new(e, "set_delay") {
            let delay = u64::try_from_val(e, &arg).map_err(|_| ContractError::InvalidPayload)?;
            Ok(SelfCall::SetDelay(delay))
        } else if call.function == Symbol::new(e, "set_pending_admin") {
            let candidate =
                Address::try_from_val(e, &arg).map_err(|_| ContractError::InvalidPayload)?;
            Ok(SelfCall::SetPendingAdmin(candidate))
        } else {
            Err(ContractError::ExecutionReverted)
        }
    }
}

pub(crate) fn dispatch(
    e: &Env,
    _token: SelfCallToken,
    call: SelfCall,
) -> Result<(), ContractError> {
    match call {
        SelfCall::SetDelay(new_delay) => {
            let bounds = timelock::load_bounds(e)?;
            bounds.check_delay(new_delay)?;
            e.storage().instance().set(&DataKey::Delay, &new_delay);
            events::emit_new_delay(e, new_delay);
        }
        SelfCall::SetPendingAdmin(candidate) => {
            require_non_null(e, &candidate)?;
            e.storage().instance().set(&DataKey::PendingAdmin, &candidate);
            events::emit_new_pending_admin(e, &candidate);
        }
    }
    Ok(())
}
