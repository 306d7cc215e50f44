#![no_std]

//! # Access Control Manager
//!
//! Answers "may `account` call the operation named `function_sig` on
//! `contract`" for the contracts that delegate their authorization to it.
//! Grants are scoped to one guarded contract, so several contracts can share
//! a manager without sharing permissions.
//!
//! ## Storage Layout
//!
//! | Key                                           | Tier           |
//! |-----------------------------------------------|----------------|
//! | `DataKey::Admin`                              | `instance()`   |
//! | `DataKey::Permission(contract, sig, account)` | `persistent()` |

use relay_errors::{require_non_null, ContractError};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Symbol};

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

#[contracttype]
#[derive(Clone)]
enum DataKey {
    /// Address allowed to grant and revoke permissions.
    Admin,
    /// Call permission: (guarded contract, function signature, account) -> true.
    Permission(Address, String, Address),
}

#[contract]
pub struct AccessControlManager;

#[contractimpl]
impl AccessControlManager {
    /// Initialize the manager with the address that administers permissions.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called twice
    /// * `NullAddress` - `admin` is the null account
    pub fn initialize(e: Env, admin: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        require_non_null(&e, &admin)?;
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.events().publish((Symbol::new(&e, "acm_initialized"),), admin);
        Ok(())
    }

    /// Allow `account` to call the operation named `function_sig` on `contract`.
    ///
    /// Granting an existing permission is a no-op apart from the event.
    pub fn give_call_permission(
        e: Env,
        contract: Address,
        function_sig: String,
        account: Address,
    ) -> Result<(), ContractError> {
        let admin = Self::require_admin(&e)?;

        let key = DataKey::Permission(contract.clone(), function_sig.clone(), account.clone());
        e.storage().persistent().set(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);

        e.events().publish(
            (Symbol::new(&e, "permission_granted"), account, contract),
            (function_sig, admin),
        );
        Ok(())
    }

    /// Withdraw a permission previously given with `give_call_permission`.
    pub fn revoke_call_permission(
        e: Env,
        contract: Address,
        function_sig: String,
        account: Address,
    ) -> Result<(), ContractError> {
        let admin = Self::require_admin(&e)?;

        let key = DataKey::Permission(contract.clone(), function_sig.clone(), account.clone());
        e.storage().persistent().remove(&key);

        e.events().publish(
            (Symbol::new(&e, "permission_revoked"), account, contract),
            (function_sig, admin),
        );
        Ok(())
    }

    /// Oracle entry point consulted by guarded contracts, which pass their
    /// own address as `contract`.
    pub fn is_allowed_to_call(
        e: Env,
        account: Address,
        contract: Address,
        function_sig: String,
    ) -> bool {
        Self::has_permission(e, account, contract, function_sig)
    }

    pub fn has_permission(
        e: Env,
        account: Address,
        contract: Address,
        function_sig: String,
    ) -> bool {
        e.storage()
            .persistent()
            .get(&DataKey::Permission(contract, function_sig, account))
            .unwrap_or(false)
    }

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)
    }

    fn require_admin(e: &Env) -> Result<Address, ContractError> {
        let admin: Address = e
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)?;
        admin.require_auth();
        Ok(admin)
    }
}
