#![no_std]

//! Shared error taxonomy for the omnichain relay governance contracts.

use soroban_sdk::contracterror;

pub mod identifier;

pub use identifier::{is_null_address, null_address, require_non_null, NULL_ACCOUNT};

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Command admission errors: quota, limits, pause (codes 200-299).
    Admission,
    /// Timelock queue errors (codes 300-399).
    Timelock,
    /// Argument validation errors (codes 400-499).
    Validation,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by the controller, timelock and
///         access control manager contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Admission
///   300 - 399 : Timelock
///   400 - 499 : Validation
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// The access control manager refused the caller for this operation.
    AccessDenied = 100,

    /// Caller is not the controller owner.
    NotOwner = 101,

    /// Caller is not the timelock admin.
    NotAdmin = 102,

    /// Caller is not the pending timelock admin.
    NotPendingAdmin = 103,

    /// Operation is only reachable through timelock execution.
    NotSelfCall = 104,

    /// Caller is not the pending controller owner.
    NotPendingOwner = 105,

    // --- Admission (200-299) ---
    /// Admitting the commands would exceed the destination's daily quota.
    LimitExceeded = 200,

    /// A new daily limit may not be lower than the current one.
    InvalidLimit = 201,

    /// Destination chain id does not fit in 16 bits.
    InvalidChainId = 202,

    /// Command sending is paused.
    ControllerPaused = 203,

    // --- Timelock (300-399) ---
    /// `eta` is earlier than `now + delay`.
    EtaTooSoon = 300,

    /// The transaction hash is not queued.
    NotQueued = 301,

    /// The transaction's `eta` has not been reached.
    TooEarly = 302,

    /// The transaction's grace period has elapsed.
    Expired = 303,

    /// The external call made by an executed transaction failed.
    ExecutionReverted = 304,

    /// Delay is outside `[minimum_delay, maximum_delay]`.
    DelayOutOfBounds = 305,

    /// Function signature is not a valid selector.
    InvalidSignature = 306,

    /// Call data could not be decoded into call arguments.
    InvalidPayload = 307,

    /// Transferred value must be non-negative.
    InvalidValue = 308,

    /// A non-zero value was requested but no value token is configured.
    ValueTokenNotSet = 309,

    /// Execution was re-entered while an external call was in flight.
    ReentrancyDetected = 310,

    // --- Validation (400-499) ---
    /// The null account was supplied where a real identifier is required.
    NullAddress = 400,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            ContractError::AccessDenied
            | ContractError::NotOwner
            | ContractError::NotAdmin
            | ContractError::NotPendingAdmin
            | ContractError::NotSelfCall
            | ContractError::NotPendingOwner => ErrorCategory::Authorization,

            ContractError::LimitExceeded
            | ContractError::InvalidLimit
            | ContractError::InvalidChainId
            | ContractError::ControllerPaused => ErrorCategory::Admission,

            ContractError::EtaTooSoon
            | ContractError::NotQueued
            | ContractError::TooEarly
            | ContractError::Expired
            | ContractError::ExecutionReverted
            | ContractError::DelayOutOfBounds
            | ContractError::InvalidSignature
            | ContractError::InvalidPayload
            | ContractError::InvalidValue
            | ContractError::ValueTokenNotSet
            | ContractError::ReentrancyDetected => ErrorCategory::Timelock,

            ContractError::NullAddress => ErrorCategory::Validation,

            ContractError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::AccessDenied => "Access control manager denied the call",
            ContractError::NotOwner => "Caller is not the owner",
            ContractError::NotAdmin => "Caller is not the timelock admin",
            ContractError::NotPendingAdmin => "Caller is not the pending timelock admin",
            ContractError::NotSelfCall => "Call must come from the timelock itself",
            ContractError::NotPendingOwner => "Caller is not the pending owner",
            ContractError::LimitExceeded => "Daily command limit exceeded",
            ContractError::InvalidLimit => "New daily limit is below the current limit",
            ContractError::InvalidChainId => "Chain id does not fit in 16 bits",
            ContractError::ControllerPaused => "Command sending is paused",
            ContractError::EtaTooSoon => "Estimated execution time does not satisfy the delay",
            ContractError::NotQueued => "Transaction has not been queued",
            ContractError::TooEarly => "Transaction has not surpassed its time lock",
            ContractError::Expired => "Transaction is stale",
            ContractError::ExecutionReverted => "Transaction execution reverted",
            ContractError::DelayOutOfBounds => "Delay is outside the allowed bounds",
            ContractError::InvalidSignature => "Function signature is not a valid selector",
            ContractError::InvalidPayload => "Call data cannot be decoded",
            ContractError::InvalidValue => "Value must be non-negative",
            ContractError::ValueTokenNotSet => "No value token configured for a non-zero value",
            ContractError::ReentrancyDetected => "Reentrancy detected; call rejected",
            ContractError::NullAddress => "Null address supplied",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
