//! Null identifier handling.
//!
//! Soroban addresses have no zero value, so the all-zero ed25519 account is
//! used as the null identifier, matching the usual Stellar burn address.

use soroban_sdk::{Address, Env, String};

use crate::ContractError;

/// Strkey of the all-zero Stellar account.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn null_address(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, NULL_ACCOUNT))
}

pub fn is_null_address(e: &Env, address: &Address) -> bool {
    *address == null_address(e)
}

/// @notice Rejects the null identifier with `NullAddress`.
pub fn require_non_null(e: &Env, address: &Address) -> Result<(), ContractError> {
    if is_null_address(e, address) {
        return Err(ContractError::NullAddress);
    }
    Ok(())
}
