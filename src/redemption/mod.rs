pub mod engine;
pub mod types;

pub use engine::RedemptionEngine;
pub use types::{AccountNumber, Portfolio, Redemption, SubscriptionList};
