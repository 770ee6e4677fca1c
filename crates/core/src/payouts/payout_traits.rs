use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::payouts::payout_model::{NewPayout, Payout, PayoutRecipient};

/// Trait for payout ledger repository operations.
#[async_trait]
pub trait PayoutRepositoryTrait: Send + Sync {
    fn get_payouts(&self) -> Result<Vec<Payout>>;
    fn get_payouts_for_recipient(&self, recipient: &PayoutRecipient) -> Result<Vec<Payout>>;
    /// Sum of all payouts to one recipient; feeds the available-balance
    /// computation of the admin split.
    fn total_for_recipient(&self, recipient: &PayoutRecipient) -> Result<Decimal>;
    async fn record_payout(&self, new_payout: NewPayout) -> Result<Payout>;
}

/// Trait for payout ledger service operations.
#[async_trait]
pub trait PayoutServiceTrait: Send + Sync {
    fn get_payouts(&self) -> Result<Vec<Payout>>;
    fn get_payouts_for_recipient(&self, recipient: &PayoutRecipient) -> Result<Vec<Payout>>;
    fn total_for_recipient(&self, recipient: &PayoutRecipient) -> Result<Decimal>;
    async fn record_payout(&self, new_payout: NewPayout) -> Result<Payout>;
}
