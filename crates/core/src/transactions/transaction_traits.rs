use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::extra_profit::NewExtraProfitAllocation;
use crate::transactions::transaction_model::{
    InrTransaction, NewInrTransaction, NewUaeTransaction, TransactionRecord, UaeTransaction,
};

/// Trait for transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn get_transaction(&self, transaction_id: &str) -> Result<TransactionRecord>;
    fn get_inr_transactions(&self) -> Result<Vec<InrTransaction>>;
    fn get_uae_transactions(&self) -> Result<Vec<UaeTransaction>>;
    /// Running invested-plus-incoming USD total for the pool, compared
    /// against the configured ceiling on each create.
    fn get_invested_total(&self) -> Result<Decimal>;
    /// Inserts the transaction and, when present, its pending extra-profit
    /// allocation in one storage transaction.
    async fn insert_inr_transaction(
        &self,
        transaction: InrTransaction,
        pending_allocation: Option<NewExtraProfitAllocation>,
    ) -> Result<InrTransaction>;
    async fn insert_uae_transaction(
        &self,
        transaction: UaeTransaction,
        pending_allocation: Option<NewExtraProfitAllocation>,
    ) -> Result<UaeTransaction>;
    /// Atomically removes the transaction and subtracts its already-applied
    /// profit contribution from cumulative totals (full revert, not partial
    /// apply).
    async fn delete_with_reversal(&self, transaction_id: &str) -> Result<()>;
}

/// Trait for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_inr_transactions(&self) -> Result<Vec<InrTransaction>>;
    fn get_uae_transactions(&self) -> Result<Vec<UaeTransaction>>;
    /// Total finalized transaction profit in AED across both legs. Pending
    /// ceiling excess is excluded until its allocation is resolved.
    fn get_total_profit_aed(&self) -> Result<Decimal>;
    async fn create_inr_transaction(&self, input: NewInrTransaction) -> Result<InrTransaction>;
    async fn create_uae_transaction(&self, input: NewUaeTransaction) -> Result<UaeTransaction>;
    async fn delete_transaction(&self, transaction_id: &str) -> Result<()>;
}
