//! Payouts module - unified payout ledger models, service, and traits.

mod payout_model;
mod payout_service;
mod payout_traits;

pub use payout_model::{NewPayout, Payout, PayoutRecipient};
pub use payout_service::PayoutService;
pub use payout_traits::{PayoutRepositoryTrait, PayoutServiceTrait};
