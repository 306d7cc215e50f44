//! Operation-level authorization delegated to the access control manager.

use relay_errors::ContractError;
use soroban_sdk::{contractclient, Address, Env, String};

use crate::DataKey;

/// Interface every access control manager exposes to guarded contracts.
#[contractclient(name = "AccessControlOracleClient")]
pub trait AccessControlOracle {
    fn is_allowed_to_call(
        env: Env,
        account: Address,
        contract: Address,
        function_sig: String,
    ) -> bool;
}

pub const SET_MAX_DAILY_LIMIT_SIG: &str = "set_max_daily_limit(u32,u128)";
pub const PAUSE_SIG: &str = "pause()";
pub const UNPAUSE_SIG: &str = "unpause()";
pub const SEND_COMMANDS_SIG: &str = "send_commands(u32,Vec<Bytes>)";

pub fn get_access_control_manager(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::AccessControlManager)
        .ok_or(ContractError::NotInitialized)
}

/// @notice Requires `caller` to have signed and to be allowed by the access
///         control manager to call `function_sig` on this contract.
pub fn authorize(e: &Env, caller: &Address, function_sig: &str) -> Result<(), ContractError> {
    caller.require_auth();
    let manager = get_access_control_manager(e)?;
    let allowed = AccessControlOracleClient::new(e, &manager).is_allowed_to_call(
        caller,
        &e.current_contract_address(),
        &String::from_str(e, function_sig),
    );
    if !allowed {
        return Err(ContractError::AccessDenied);
    }
    Ok(())
}
