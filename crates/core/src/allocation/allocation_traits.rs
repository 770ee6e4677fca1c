use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;

use super::allocation_model::{
    AdminSplit, BrokerCommissionSummary, DailyAccrual, DailyAllocationOutcome, WeekdayStatus,
};
use super::roi_policy::RoiSelectionPolicy;

/// Trait for the per-day accrual ledger.
///
/// The ledger is the idempotency guard for daily allocation: one entry per
/// calendar date, committed atomically together with the cumulative-total
/// updates it implies.
#[async_trait]
pub trait DailyAccrualRepositoryTrait: Send + Sync {
    fn get_accrual_for_date(&self, date: NaiveDate) -> Result<Option<DailyAccrual>>;

    /// True when the ledger entry for this date has been found corrupt.
    /// Accrual for a poisoned date is halted until manual reconciliation.
    fn is_date_poisoned(&self, date: NaiveDate) -> Result<bool>;

    async fn mark_date_poisoned(&self, date: NaiveDate) -> Result<()>;

    /// Commits the accrual and applies its contribution to investor and
    /// broker cumulative totals in one atomic read-modify-write keyed by
    /// date. When `replaces` is given the prior day's contribution is
    /// subtracted before the new one is added (force-replace, never
    /// add-on-top). A concurrent commit for the same date must fail with
    /// `AllocationError::ConcurrentAccrualConflict`.
    async fn commit_daily_accrual(
        &self,
        accrual: &DailyAccrual,
        replaces: Option<&DailyAccrual>,
    ) -> Result<()>;
}

/// Trait for the daily allocation orchestrator.
#[async_trait]
pub trait AllocationServiceTrait: Send + Sync {
    /// Runs (or replays) the daily allocation for `date`, which callers are
    /// expected to take from the server clock, not client input.
    async fn allocate_daily(
        &self,
        date: NaiveDate,
        policy: &dyn RoiSelectionPolicy,
        force: bool,
    ) -> Result<DailyAllocationOutcome>;

    /// Business-day gate status for a date, exposed so the UI can tell
    /// "skipped because weekend" apart from a failed calculation.
    fn weekday_status(&self, date: NaiveDate) -> WeekdayStatus;

    fn get_admin_split(&self) -> Result<AdminSplit>;

    fn get_broker_commission_summary(&self) -> Result<Vec<BrokerCommissionSummary>>;
}
