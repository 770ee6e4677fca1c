use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::Result;

use super::payout_model::{NewPayout, Payout, PayoutRecipient};
use super::payout_traits::{PayoutRepositoryTrait, PayoutServiceTrait};

/// Thin service over the unified payout ledger: validates input, mints ids,
/// and delegates persistence to the repository.
pub struct PayoutService {
    repository: Arc<dyn PayoutRepositoryTrait>,
}

impl PayoutService {
    pub fn new(repository: Arc<dyn PayoutRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PayoutServiceTrait for PayoutService {
    fn get_payouts(&self) -> Result<Vec<Payout>> {
        self.repository.get_payouts()
    }

    fn get_payouts_for_recipient(&self, recipient: &PayoutRecipient) -> Result<Vec<Payout>> {
        self.repository.get_payouts_for_recipient(recipient)
    }

    fn total_for_recipient(&self, recipient: &PayoutRecipient) -> Result<Decimal> {
        self.repository.total_for_recipient(recipient)
    }

    async fn record_payout(&self, mut new_payout: NewPayout) -> Result<Payout> {
        new_payout.validate()?;
        if new_payout.id.is_none() {
            new_payout.id = Some(Uuid::new_v4().to_string());
        }
        debug!(
            "Recording payout of {} AED to {}",
            new_payout.amount_aed,
            new_payout.recipient.ledger_id()
        );
        self.repository.record_payout(new_payout).await
    }
}
