use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::{AllocationError, Result};
use crate::extra_profit::{ExtraProfitRepositoryTrait, NewExtraProfitAllocation};
use crate::rates::RateConfig;

use super::profit_calculator::{CeilingOutcome, TransactionProfitCalculator};
use super::transaction_model::{
    InrTransaction, NewInrTransaction, NewUaeTransaction, TransactionType, UaeTransaction,
};
use super::transaction_traits::{TransactionRepositoryTrait, TransactionServiceTrait};

/// Service owning the transaction lifecycle: validated creation with the
/// ceiling check, reversal-guarded deletion, and the finalized-profit
/// aggregate the admin split reads.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    extra_profit_repository: Arc<dyn ExtraProfitRepositoryTrait>,
    rate_config: Arc<RwLock<RateConfig>>,
}

impl TransactionService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        extra_profit_repository: Arc<dyn ExtraProfitRepositoryTrait>,
        rate_config: Arc<RwLock<RateConfig>>,
    ) -> Self {
        Self {
            repository,
            extra_profit_repository,
            rate_config,
        }
    }

    fn config(&self) -> RateConfig {
        self.rate_config.read().unwrap().clone()
    }

    /// Runs the ceiling check and splits the computed profit into the
    /// retained share plus an optional pending allocation.
    fn apply_ceiling(
        &self,
        transaction_id: &str,
        transaction_type: TransactionType,
        amount: Decimal,
        profit_aed: Decimal,
        ceiling: Decimal,
    ) -> Result<(Decimal, Option<NewExtraProfitAllocation>)> {
        let invested_total = self.repository.get_invested_total()?;

        match TransactionProfitCalculator::check_ceiling(
            invested_total,
            amount,
            profit_aed,
            ceiling,
        )? {
            CeilingOutcome::Within => Ok((profit_aed, None)),
            CeilingOutcome::Exceeded {
                extra_amount,
                extra_profit_amount,
                retained_profit_aed,
            } => {
                warn!(
                    "Transaction {} breaches investment ceiling: {} USD excess, {} AED parked",
                    transaction_id, extra_amount, extra_profit_amount
                );
                let pending = NewExtraProfitAllocation {
                    id: Some(Uuid::new_v4().to_string()),
                    transaction_id: transaction_id.to_string(),
                    transaction_type,
                    extra_amount,
                    extra_profit_amount,
                };
                pending.validate()?;
                Ok((retained_profit_aed, Some(pending)))
            }
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_inr_transactions(&self) -> Result<Vec<InrTransaction>> {
        self.repository.get_inr_transactions()
    }

    fn get_uae_transactions(&self) -> Result<Vec<UaeTransaction>> {
        self.repository.get_uae_transactions()
    }

    fn get_total_profit_aed(&self) -> Result<Decimal> {
        // Retained shares are final immediately; parked excess only becomes
        // final once its allocation is resolved. The resolved remainder then
        // reaches the admin pool through the net-profit identity.
        let inr = self.repository.get_inr_transactions()?;
        let uae = self.repository.get_uae_transactions()?;

        let mut total: Decimal = inr.iter().map(|t| t.retained_profit_aed).sum();
        total += uae.iter().map(|t| t.retained_profit_aed).sum::<Decimal>();

        let allocation_ids = inr
            .iter()
            .filter_map(|t| t.extra_allocation_id.as_deref())
            .chain(uae.iter().filter_map(|t| t.extra_allocation_id.as_deref()));
        for allocation_id in allocation_ids {
            let allocation = self.extra_profit_repository.get_allocation(allocation_id)?;
            if !allocation.is_pending() {
                total += allocation.extra_profit_amount;
            }
        }

        Ok(total)
    }

    async fn create_inr_transaction(&self, input: NewInrTransaction) -> Result<InrTransaction> {
        input.validate()?;
        let config = self.config();

        let profit = TransactionProfitCalculator::compute_inr_profit(
            input.amount,
            config.aed_conversion_rate,
            input.aed_to_usdt,
            input.inr_to_aed,
            input.usdt_selling_inr,
        )?;

        let id = input.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let (retained_profit_aed, pending) = self.apply_ceiling(
            &id,
            TransactionType::Inr,
            input.amount,
            profit.profit_aed,
            config.investment_ceiling,
        )?;

        let transaction = InrTransaction {
            extra_allocation_id: pending.as_ref().and_then(|p| p.id.clone()),
            id,
            amount: input.amount,
            transaction_date: input.transaction_date,
            aed_to_usdt: input.aed_to_usdt,
            inr_to_aed: input.inr_to_aed,
            usdt_selling_inr: input.usdt_selling_inr,
            profit_inr: profit.profit_inr,
            profit_aed: profit.profit_aed,
            roi_percent: profit.roi_percent,
            retained_profit_aed,
        };

        debug!(
            "Creating INR transaction {}: profit {} AED, ROI {}%",
            transaction.id, transaction.profit_aed, transaction.roi_percent
        );
        self.repository
            .insert_inr_transaction(transaction, pending)
            .await
    }

    async fn create_uae_transaction(&self, input: NewUaeTransaction) -> Result<UaeTransaction> {
        input.validate()?;
        let config = self.config();

        let profit = TransactionProfitCalculator::compute_uae_profit(
            input.amount,
            config.aed_conversion_rate,
            input.usdt_buy_rate,
            input.usdt_sell_rate,
        )?;

        let id = input.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let (retained_profit_aed, pending) = self.apply_ceiling(
            &id,
            TransactionType::Uae,
            input.amount,
            profit.profit_aed,
            config.investment_ceiling,
        )?;

        let transaction = UaeTransaction {
            extra_allocation_id: pending.as_ref().and_then(|p| p.id.clone()),
            id,
            amount: input.amount,
            transaction_date: input.transaction_date,
            usdt_buy_rate: input.usdt_buy_rate,
            usdt_sell_rate: input.usdt_sell_rate,
            profit_aed: profit.profit_aed,
            roi_percent: profit.roi_percent,
            retained_profit_aed,
        };

        debug!(
            "Creating UAE transaction {}: profit {} AED, ROI {}%",
            transaction.id, transaction.profit_aed, transaction.roi_percent
        );
        self.repository
            .insert_uae_transaction(transaction, pending)
            .await
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
        let record = self.repository.get_transaction(transaction_id)?;

        // A resolved allocation has already redistributed the excess to a
        // target and the admin pool; the contribution is no longer exactly
        // reversible, so the deletion is rejected instead of leaving totals
        // inconsistent.
        if let Some(allocation_id) = record.extra_allocation_id() {
            let allocation = self.extra_profit_repository.get_allocation(allocation_id)?;
            if !allocation.is_pending() {
                return Err(AllocationError::ReversalRequired {
                    transaction_id: transaction_id.to_string(),
                }
                .into());
            }
        }

        debug!("Deleting transaction {} with reversal", transaction_id);
        self.repository.delete_with_reversal(transaction_id).await
    }
}

/// Convenience used by API adapters that only have a date string.
pub fn parse_transaction_date(raw: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")?)
}
