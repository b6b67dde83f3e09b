use crate::{
    eligibility::{
        error::{EligibilityError, EligibilityErrorKind},
        ports::EligibilityPort,
        types::EligibilityStatus,
    },
    redemption::types::AccountNumber,
};

/// Deterministic capability returning a fixed status for every account.
#[derive(Debug, Clone, Copy)]
pub struct StaticEligibility {
    status: EligibilityStatus,
}

impl StaticEligibility {
    pub fn new(status: EligibilityStatus) -> Self {
        Self { status }
    }

    pub fn eligible() -> Self {
        Self::new(EligibilityStatus::Eligible)
    }

    pub fn ineligible() -> Self {
        Self::new(EligibilityStatus::Ineligible)
    }
}

impl Default for StaticEligibility {
    fn default() -> Self {
        Self::ineligible()
    }
}

impl EligibilityPort for StaticEligibility {
    fn check(&self, _account_number: &AccountNumber) -> Result<EligibilityStatus, EligibilityError> {
        Ok(self.status)
    }
}

/// Deterministic capability failing every check with a fixed error kind.
#[derive(Debug, Clone, Copy)]
pub struct FailingEligibility {
    kind: EligibilityErrorKind,
}

impl FailingEligibility {
    pub fn new(kind: EligibilityErrorKind) -> Self {
        Self { kind }
    }

    pub fn invalid_account_number() -> Self {
        Self::new(EligibilityErrorKind::InvalidAccountNumber)
    }

    pub fn technical_failure() -> Self {
        Self::new(EligibilityErrorKind::TechnicalFailure)
    }
}

impl EligibilityPort for FailingEligibility {
    fn check(&self, account_number: &AccountNumber) -> Result<EligibilityStatus, EligibilityError> {
        Err(EligibilityError::new(
            self.kind,
            format!("eligibility check failed for account '{account_number}'"),
        ))
    }
}
