use serde::{Deserialize, Serialize};

/// Outcome of an eligibility check. Only the explicit `Eligible` value
/// unlocks rewards; everything else is treated as "no rewards".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityStatus {
    Eligible,
    Ineligible,
}
