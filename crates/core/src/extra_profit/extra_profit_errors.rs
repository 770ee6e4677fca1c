use rust_decimal::Decimal;
use thiserror::Error;

/// Errors specific to the extra-profit allocation workflow.
///
/// Both rejection variants leave the allocation `pending`; the caller may
/// retry with corrected input.
#[derive(Error, Debug)]
pub enum ExtraProfitError {
    #[error("Allocation {0} is already resolved")]
    AlreadyResolved(String),

    #[error("Allocated amount {requested} is outside (0, {available}]")]
    InvalidAllocationAmount {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Allocation {0} not found")]
    NotFound(String),
}
