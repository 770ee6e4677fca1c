//! Transactions module - arbitrage transaction models, the profit
//! calculator, and the lifecycle service.

mod profit_calculator;
mod transaction_model;
mod transaction_service;
mod transaction_traits;

pub use profit_calculator::{CeilingOutcome, InrProfit, TransactionProfitCalculator, UaeProfit};
pub use transaction_model::{
    InrTransaction, NewInrTransaction, NewUaeTransaction, TransactionRecord, TransactionType,
    UaeTransaction,
};
pub use transaction_service::{parse_transaction_date, TransactionService};
pub use transaction_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
