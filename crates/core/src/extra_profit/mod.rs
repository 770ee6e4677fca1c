//! Extra-profit allocation module - the two-phase workflow for ceiling
//! breaches: pending creation alongside the transaction, manual resolution
//! by an administrator.

mod extra_profit_errors;
mod extra_profit_model;
mod extra_profit_service;
mod extra_profit_traits;

pub use extra_profit_errors::ExtraProfitError;
pub use extra_profit_model::{
    AllocationStatus, AllocationTarget, ExtraProfitAllocation, ExtraProfitResolution,
    NewExtraProfitAllocation,
};
pub use extra_profit_service::ExtraProfitService;
pub use extra_profit_traits::{ExtraProfitRepositoryTrait, ExtraProfitServiceTrait};
