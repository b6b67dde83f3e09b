use tracing::{debug, warn};

use crate::{
    catalog::RewardCatalog,
    eligibility::{
        error::EligibilityErrorKind, ports::EligibilityPort, types::EligibilityStatus,
    },
    redemption::types::{AccountNumber, Portfolio, Redemption},
};

/// Resolves which promotional rewards a customer qualifies for.
///
/// The operation never fails: every failure mode of the injected
/// eligibility capability is normalized into a well-formed [`Redemption`],
/// either flagged (invalid account number) or silently empty (anything
/// else). Stateless per call; safe for concurrent use as long as the
/// capability honors its own `Send + Sync` contract.
#[derive(Debug, Clone, Default)]
pub struct RedemptionEngine {
    catalog: RewardCatalog,
}

impl RedemptionEngine {
    pub fn new(catalog: RewardCatalog) -> Self {
        Self { catalog }
    }

    pub fn with_defaults() -> Self {
        Self {
            catalog: RewardCatalog::with_defaults(),
        }
    }

    pub fn catalog(&self) -> &RewardCatalog {
        &self.catalog
    }

    pub fn redeem(
        &self,
        eligibility: &dyn EligibilityPort,
        account_number: &AccountNumber,
        portfolio: &Portfolio,
    ) -> Redemption {
        let status = match eligibility.check(account_number) {
            Ok(status) => status,
            Err(err) if err.kind == EligibilityErrorKind::InvalidAccountNumber => {
                debug!(
                    target: "redemption",
                    account_number = %account_number,
                    "eligibility check rejected account number"
                );
                return Redemption::invalid_account();
            }
            Err(err) => {
                warn!(
                    target: "redemption",
                    account_number = %account_number,
                    kind = ?err.kind,
                    error = %err,
                    "eligibility check failed, degrading to empty rewards"
                );
                return Redemption::empty();
            }
        };

        if status != EligibilityStatus::Eligible {
            return Redemption::empty();
        }

        let rewards = portfolio
            .customer_subscriptions
            .channels()
            .iter()
            .flat_map(|identifier| self.catalog.rewards_for(identifier).iter().cloned())
            .collect();

        Redemption::granted(rewards)
    }
}
