#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{is_null_address, null_address, require_non_null};
    use crate::{ContractError, ErrorCategory, ErrorExt};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Env};
    use std::vec::Vec;

    fn all_variants() -> Vec<ContractError> {
        std::vec![
            ContractError::NotInitialized,
            ContractError::AlreadyInitialized,
            ContractError::AccessDenied,
            ContractError::NotOwner,
            ContractError::NotAdmin,
            ContractError::NotPendingAdmin,
            ContractError::NotSelfCall,
            ContractError::NotPendingOwner,
            ContractError::LimitExceeded,
            ContractError::InvalidLimit,
            ContractError::InvalidChainId,
            ContractError::ControllerPaused,
            ContractError::EtaTooSoon,
            ContractError::NotQueued,
            ContractError::TooEarly,
            ContractError::Expired,
            ContractError::ExecutionReverted,
            ContractError::DelayOutOfBounds,
            ContractError::InvalidSignature,
            ContractError::InvalidPayload,
            ContractError::InvalidValue,
            ContractError::ValueTokenNotSet,
            ContractError::ReentrancyDetected,
            ContractError::NullAddress,
            ContractError::Overflow,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(ContractError::NotInitialized as u32, 1);
        assert_eq!(ContractError::AlreadyInitialized as u32, 2);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(ContractError::AccessDenied as u32, 100);
        assert_eq!(ContractError::NotOwner as u32, 101);
        assert_eq!(ContractError::NotAdmin as u32, 102);
        assert_eq!(ContractError::NotPendingAdmin as u32, 103);
        assert_eq!(ContractError::NotSelfCall as u32, 104);
        assert_eq!(ContractError::NotPendingOwner as u32, 105);
    }

    #[test]
    fn test_codes_admission() {
        assert_eq!(ContractError::LimitExceeded as u32, 200);
        assert_eq!(ContractError::InvalidLimit as u32, 201);
        assert_eq!(ContractError::InvalidChainId as u32, 202);
        assert_eq!(ContractError::ControllerPaused as u32, 203);
    }

    #[test]
    fn test_codes_timelock() {
        assert_eq!(ContractError::EtaTooSoon as u32, 300);
        assert_eq!(ContractError::NotQueued as u32, 301);
        assert_eq!(ContractError::TooEarly as u32, 302);
        assert_eq!(ContractError::Expired as u32, 303);
        assert_eq!(ContractError::ExecutionReverted as u32, 304);
        assert_eq!(ContractError::DelayOutOfBounds as u32, 305);
        assert_eq!(ContractError::InvalidSignature as u32, 306);
        assert_eq!(ContractError::InvalidPayload as u32, 307);
        assert_eq!(ContractError::InvalidValue as u32, 308);
        assert_eq!(ContractError::ValueTokenNotSet as u32, 309);
        assert_eq!(ContractError::ReentrancyDetected as u32, 310);
    }

    #[test]
    fn test_codes_validation_and_arithmetic() {
        assert_eq!(ContractError::NullAddress as u32, 400);
        assert_eq!(ContractError::Overflow as u32, 700);
    }

    // --- Category mapping tests ---

    #[test]
    fn test_codes_fall_in_their_category_range() {
        for err in all_variants() {
            let code = err as u32;
            let expected = match code {
                1..=99 => ErrorCategory::Initialization,
                100..=199 => ErrorCategory::Authorization,
                200..=299 => ErrorCategory::Admission,
                300..=399 => ErrorCategory::Timelock,
                400..=499 => ErrorCategory::Validation,
                700..=799 => ErrorCategory::Arithmetic,
                _ => panic!("code {} outside every category", code),
            };
            assert_eq!(err.category(), expected, "wrong category for {:?}", err);
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let variants = all_variants();
        for (i, a) in variants.iter().enumerate() {
            for b in variants.iter().skip(i + 1) {
                assert_ne!(*a as u32, *b as u32);
            }
        }
    }

    #[test]
    fn test_descriptions_non_empty() {
        for err in all_variants() {
            assert!(!err.description().is_empty());
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(ContractError::NotAdmin, ContractError::NotAdmin);
        assert_ne!(ContractError::NotAdmin, ContractError::NotPendingAdmin);
    }

    // arithmetic
    #[test]
    fn test_overflow() {
        let result: Result<u128, ContractError> =
            u128::MAX.checked_add(1).ok_or(ContractError::Overflow);
        assert_eq!(result, Err(ContractError::Overflow));
    }

    // --- Null identifier ---

    #[test]
    fn test_null_address_rejected() {
        let e = Env::default();
        let null = null_address(&e);
        assert!(is_null_address(&e, &null));
        assert_eq!(require_non_null(&e, &null), Err(ContractError::NullAddress));
    }

    #[test]
    fn test_generated_address_accepted() {
        let e = Env::default();
        let account = Address::generate(&e);
        assert!(!is_null_address(&e, &account));
        assert!(require_non_null(&e, &account).is_ok());
    }
}
