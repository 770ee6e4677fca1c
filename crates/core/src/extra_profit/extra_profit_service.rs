use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::Result;

use super::extra_profit_errors::ExtraProfitError;
use super::extra_profit_model::{
    AllocationTarget, ExtraProfitAllocation, ExtraProfitResolution,
};
use super::extra_profit_traits::{ExtraProfitRepositoryTrait, ExtraProfitServiceTrait};

/// Service driving the two-phase extra-profit workflow.
///
/// Phase 1 (creation) happens inside the transaction service when a ceiling
/// breach is detected; this service owns phase 2: validating and committing
/// the administrator's resolution.
pub struct ExtraProfitService {
    repository: Arc<dyn ExtraProfitRepositoryTrait>,
}

impl ExtraProfitService {
    pub fn new(repository: Arc<dyn ExtraProfitRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ExtraProfitServiceTrait for ExtraProfitService {
    fn get_allocation(&self, allocation_id: &str) -> Result<ExtraProfitAllocation> {
        self.repository.get_allocation(allocation_id)
    }

    fn get_pending_allocations(&self) -> Result<Vec<ExtraProfitAllocation>> {
        self.repository.get_pending_allocations()
    }

    async fn resolve(
        &self,
        allocation_id: &str,
        target: AllocationTarget,
        allocated_amount: Decimal,
    ) -> Result<ExtraProfitAllocation> {
        let allocation = self.repository.get_allocation(allocation_id)?;

        if !allocation.is_pending() {
            warn!("Rejected re-resolution of allocation {}", allocation_id);
            return Err(ExtraProfitError::AlreadyResolved(allocation_id.to_string()).into());
        }

        if allocated_amount <= Decimal::ZERO || allocated_amount > allocation.extra_profit_amount {
            return Err(ExtraProfitError::InvalidAllocationAmount {
                requested: allocated_amount,
                available: allocation.extra_profit_amount,
            }
            .into());
        }

        let resolution = ExtraProfitResolution {
            allocation_id: allocation_id.to_string(),
            target,
            allocated_amount,
            admin_remainder: allocation.extra_profit_amount - allocated_amount,
        };

        debug!(
            "Resolving allocation {}: {} AED to target, {} AED remainder to admin pool",
            allocation_id, resolution.allocated_amount, resolution.admin_remainder
        );

        // Crediting the target, crediting the admin pool, and flipping the
        // status must happen in one storage transaction.
        self.repository.commit_resolution(&resolution).await
    }
}
