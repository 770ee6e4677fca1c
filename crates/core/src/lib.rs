//! Arbdesk Core - Profit & commission allocation engine.
//!
//! This crate contains the allocation rules for the Arbdesk brokerage back
//! office: transaction profit for the INR and UAE arbitrage legs, daily
//! investor profit accrual, broker commission skims, the two-admin residual
//! split, and the extra-profit workflow for investment-ceiling breaches.
//! It is database-agnostic and defines the repository traits the storage
//! layer implements.

pub mod allocation;
pub mod brokers;
pub mod constants;
pub mod errors;
pub mod extra_profit;
pub mod investors;
pub mod payouts;
pub mod rates;
pub mod transactions;

// Re-export common types from the allocation pipeline
pub use allocation::*;
pub use transactions::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
