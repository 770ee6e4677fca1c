use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::extra_profit::extra_profit_model::{
    AllocationTarget, ExtraProfitAllocation, ExtraProfitResolution, NewExtraProfitAllocation,
};

/// Trait for extra-profit allocation repository operations.
#[async_trait]
pub trait ExtraProfitRepositoryTrait: Send + Sync {
    fn get_allocation(&self, allocation_id: &str) -> Result<ExtraProfitAllocation>;
    fn get_pending_allocations(&self) -> Result<Vec<ExtraProfitAllocation>>;
    fn get_allocation_for_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<Option<ExtraProfitAllocation>>;
    async fn create_allocation(
        &self,
        new_allocation: NewExtraProfitAllocation,
    ) -> Result<ExtraProfitAllocation>;
    /// Applies a validated resolution as one atomic unit: credit the target's
    /// cumulative total, credit the admin pool with the remainder, and flip
    /// the allocation to resolved. A concurrent resolution of the same
    /// allocation must fail rather than apply twice.
    async fn commit_resolution(
        &self,
        resolution: &ExtraProfitResolution,
    ) -> Result<ExtraProfitAllocation>;
}

/// Trait for extra-profit workflow service operations.
#[async_trait]
pub trait ExtraProfitServiceTrait: Send + Sync {
    fn get_allocation(&self, allocation_id: &str) -> Result<ExtraProfitAllocation>;
    fn get_pending_allocations(&self) -> Result<Vec<ExtraProfitAllocation>>;
    async fn resolve(
        &self,
        allocation_id: &str,
        target: AllocationTarget,
        allocated_amount: Decimal,
    ) -> Result<ExtraProfitAllocation>;
}
