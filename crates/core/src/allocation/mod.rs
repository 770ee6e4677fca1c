//! Allocation module - the daily accrual pipeline: investor profit, broker
//! commission skim, admin split, and the orchestrating service.

mod admin_split;
mod allocation_model;
mod allocation_service;
mod allocation_traits;
mod commission_allocator;
mod investor_allocator;
mod roi_policy;

pub use admin_split::AdminSplitCalculator;
pub use allocation_model::{
    AdminSplit, BrokerCommissionSummary, BrokerDailyCommission, DailyAccrual,
    DailyAllocationOutcome, InvestorDailyProfit, WeekdayStatus,
};
pub use allocation_service::AllocationService;
pub use allocation_traits::{AllocationServiceTrait, DailyAccrualRepositoryTrait};
pub use commission_allocator::BrokerCommissionAllocator;
pub use investor_allocator::InvestorProfitAllocator;
pub use roi_policy::{FixedRate, Midpoint, RoiSelectionPolicy, UniformRandom};
