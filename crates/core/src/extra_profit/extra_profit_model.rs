//! Extra-profit allocation domain models.
//!
//! An extra-profit allocation is created when a transaction's amount pushes
//! the pool past the configured investment ceiling. The excess profit is
//! parked in `pending` state and excluded from the normal allocation flow
//! until an administrator resolves it.

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::transactions::TransactionType;

/// Lifecycle state of an extra-profit allocation. `Pending -> Resolved` is
/// the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationStatus {
    Pending,
    Resolved,
}

/// Beneficiary an administrator assigns the excess profit to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "id")]
pub enum AllocationTarget {
    Investor(String),
    Broker(String),
}

/// Domain model for an extra-profit allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraProfitAllocation {
    pub id: String,
    /// Transaction whose amount breached the ceiling. The allocation is
    /// created atomically with it.
    pub transaction_id: String,
    pub transaction_type: TransactionType,
    /// USD portion of the transaction amount beyond the ceiling.
    pub extra_amount: Decimal,
    /// AED profit attributable to the excess. Always a non-negative
    /// magnitude, even when the underlying transaction was a loss.
    pub extra_profit_amount: Decimal,
    pub status: AllocationStatus,
    pub resolved_target: Option<AllocationTarget>,
    pub resolved_amount: Option<Decimal>,
    /// Remainder credited to the admin pool at resolution.
    pub admin_remainder: Option<Decimal>,
    pub created_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
}

impl ExtraProfitAllocation {
    pub fn is_pending(&self) -> bool {
        self.status == AllocationStatus::Pending
    }
}

/// Input model for creating a pending allocation alongside its transaction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExtraProfitAllocation {
    pub id: Option<String>,
    pub transaction_id: String,
    pub transaction_type: TransactionType,
    pub extra_amount: Decimal,
    pub extra_profit_amount: Decimal,
}

impl NewExtraProfitAllocation {
    pub fn validate(&self) -> Result<()> {
        if self.extra_amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveValue {
                field: "extraAmount".to_string(),
                value: self.extra_amount.to_string(),
            }
            .into());
        }
        if self.extra_profit_amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "extraProfitAmount must be a non-negative magnitude, got {}",
                self.extra_profit_amount
            ))
            .into());
        }
        Ok(())
    }

    pub fn into_pending(self) -> ExtraProfitAllocation {
        ExtraProfitAllocation {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            transaction_id: self.transaction_id,
            transaction_type: self.transaction_type,
            extra_amount: self.extra_amount,
            extra_profit_amount: self.extra_profit_amount,
            status: AllocationStatus::Pending,
            resolved_target: None,
            resolved_amount: None,
            admin_remainder: None,
            created_at: Utc::now().naive_utc(),
            resolved_at: None,
        }
    }
}

/// Validated outcome of a resolution attempt, handed to the repository to
/// apply in one atomic unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraProfitResolution {
    pub allocation_id: String,
    pub target: AllocationTarget,
    pub allocated_amount: Decimal,
    pub admin_remainder: Decimal,
}
