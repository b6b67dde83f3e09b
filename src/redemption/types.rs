use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Reward;

/// Opaque customer account identifier. The redemption core performs no
/// validation of it; that is the eligibility capability's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(identifier: &str) -> Self {
        AccountNumber::new(identifier)
    }
}

/// Ordered channel identifiers as supplied by the caller.
///
/// Callers are expected to send an array, but a misbehaving caller may
/// send a bare string; that form carries zero channels rather than being
/// rejected. Entries may be identifiers outside the known channel set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubscriptionList {
    Many(Vec<String>),
    Single(String),
}

impl SubscriptionList {
    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SubscriptionList::Many(identifiers.into_iter().map(Into::into).collect())
    }

    /// The subscribed channel identifiers in caller order. The bare-string
    /// form folds to no channels.
    pub fn channels(&self) -> &[String] {
        match self {
            SubscriptionList::Many(channels) => channels,
            SubscriptionList::Single(_) => &[],
        }
    }
}

impl Default for SubscriptionList {
    fn default() -> Self {
        SubscriptionList::Many(Vec::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub customer_subscriptions: SubscriptionList,
}

impl Portfolio {
    pub fn new(customer_subscriptions: SubscriptionList) -> Self {
        Self {
            customer_subscriptions,
        }
    }
}

/// Result of a redemption. The reward sequence is present on every path;
/// "no rewards" is an empty sequence, never a missing field. The invalid
/// account flag is serialized only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    pub rewards: Vec<Reward>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub invalid_account_number: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Redemption {
    pub fn granted(rewards: Vec<Reward>) -> Self {
        Self {
            rewards,
            invalid_account_number: false,
        }
    }

    pub fn empty() -> Self {
        Self::granted(Vec::new())
    }

    pub fn invalid_account() -> Self {
        Self {
            rewards: Vec::new(),
            invalid_account_number: true,
        }
    }
}
