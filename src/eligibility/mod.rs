pub mod error;
pub mod noop;
pub mod ports;
pub mod types;

pub use error::{EligibilityError, EligibilityErrorKind};
pub use noop::{FailingEligibility, StaticEligibility};
pub use ports::EligibilityPort;
pub use types::EligibilityStatus;
