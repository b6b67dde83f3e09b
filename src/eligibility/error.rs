use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityErrorKind {
    InvalidAccountNumber,
    TechnicalFailure,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityError {
    pub kind: EligibilityErrorKind,
    pub message: String,
}

impl EligibilityError {
    pub fn new(kind: EligibilityErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for EligibilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EligibilityError {}

pub fn invalid_account_number(message: impl Into<String>) -> EligibilityError {
    EligibilityError::new(EligibilityErrorKind::InvalidAccountNumber, message)
}

pub fn technical_failure(message: impl Into<String>) -> EligibilityError {
    EligibilityError::new(EligibilityErrorKind::TechnicalFailure, message)
}

pub fn internal_error(message: impl Into<String>) -> EligibilityError {
    EligibilityError::new(EligibilityErrorKind::Internal, message)
}
