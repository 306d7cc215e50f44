//! Call payload construction for queued transactions.
//!
//! A non-empty signature selects the target function by name (`name` or
//! `name(types)`) and `data` holds the XDR of the argument `Vec<Val>`. An
//! empty signature marks a raw call: `data` holds the XDR of the whole
//! `(Symbol, Vec<Val>)` invocation.

use relay_errors::ContractError;
use soroban_sdk::xdr::{FromXdr, ToXdr};
use soroban_sdk::{Address, Bytes, BytesN, Env, String, Symbol, Val, Vec};

/// Longest accepted signature, parameter list included.
pub const MAX_SIGNATURE_LEN: usize = 96;
/// Longest Soroban function name.
pub const MAX_FUNCTION_NAME_LEN: usize = 32;

/// A decoded contract invocation.
pub struct Call {
    pub function: Symbol,
    pub args: Vec<Val>,
}

/// Content hash identifying a proposed transaction. Identical tuples share a hash.
pub fn transaction_hash(
    e: &Env,
    target: &Address,
    value: i128,
    signature: &String,
    data: &Bytes,
    eta: u64,
) -> BytesN<32> {
    let tuple = (target.clone(), value, signature.clone(), data.clone(), eta);
    e.crypto().sha256(&tuple.to_xdr(e)).to_bytes()
}

/// @notice Derives the function selector from `signature`.
/// @return `None` for an empty signature (raw call).
pub fn selector(e: &Env, signature: &String) -> Result<Option<Symbol>, ContractError> {
    let len = signature.len() as usize;
    if len == 0 {
        return Ok(None);
    }
    if len > MAX_SIGNATURE_LEN {
        return Err(ContractError::InvalidSignature);
    }

    let mut buf = [0u8; MAX_SIGNATURE_LEN];
    signature.copy_into_slice(&mut buf[..len]);
    let raw = &buf[..len];

    let name_len = raw.iter().position(|b| *b == b'(').unwrap_or(len);
    let name = &raw[..name_len];
    if name.is_empty() || name.len() > MAX_FUNCTION_NAME_LEN {
        return Err(ContractError::InvalidSignature);
    }
    if !name.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'_') {
        return Err(ContractError::InvalidSignature);
    }
    if name_len < len && raw[len - 1] != b')' {
        return Err(ContractError::InvalidSignature);
    }

    let name = core::str::from_utf8(name).map_err(|_| ContractError::InvalidSignature)?;
    Ok(Some(Symbol::new(e, name)))
}

/// @notice Builds the invocation described by `signature` and `data`.
/// @dev    Bytes that are not XDR at all abort the invocation in the host;
///         well-formed XDR of the wrong shape yields `InvalidPayload`.
pub fn build_call(e: &Env, signature: &String, data: &Bytes) -> Result<Call, ContractError> {
    match selector(e, signature)? {
        Some(function) => {
            let args =
                Vec::<Val>::from_xdr(e, data).map_err(|_| ContractError::InvalidPayload)?;
            Ok(Call { function, args })
        }
        None => {
            let (function, args) = <(Symbol, Vec<Val>)>::from_xdr(e, data)
                .map_err(|_| ContractError::InvalidPayload)?;
            Ok(Call { function, args })
        }
    }
}
