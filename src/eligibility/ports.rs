use crate::{
    eligibility::{error::EligibilityError, types::EligibilityStatus},
    redemption::types::AccountNumber,
};

/// External capability deciding whether a customer qualifies for rewards.
///
/// Implementations own account-number validation: a malformed number is
/// reported as an `InvalidAccountNumber` error, any other trouble as
/// `TechnicalFailure` or `Internal`. Callers treat the check as a black
/// box that either returns a status or fails.
pub trait EligibilityPort: Send + Sync {
    fn check(&self, account_number: &AccountNumber) -> Result<EligibilityStatus, EligibilityError>;
}
