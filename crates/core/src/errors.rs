//! Core error types for the Arbdesk allocation engine.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::{NaiveDate, ParseError as ChronoParseError};
use std::num::ParseFloatError;
use thiserror::Error;

use crate::extra_profit::ExtraProfitError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the allocation engine.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Allocation failed: {0}")]
    Allocation(#[from] AllocationError),

    #[error("Extra profit allocation error: {0}")]
    ExtraProfit(#[from] ExtraProfitError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Errors raised by the daily accrual pipeline and transaction lifecycle.
#[derive(Error, Debug)]
pub enum AllocationError {
    /// The per-day idempotency guard detected a concurrent accrual for the
    /// same date. The caller should re-read current state and retry.
    #[error("Concurrent accrual detected for {date}; re-read current state and retry")]
    ConcurrentAccrualConflict { date: NaiveDate },

    /// The accrual ledger entry for this date is corrupt. Further accrual
    /// attempts for the date are halted until manually reconciled.
    #[error("Accrual ledger for {date} is poisoned; manual reconciliation required")]
    AccrualLedgerPoisoned { date: NaiveDate },

    /// Deleting this transaction would leave cumulative totals inconsistent
    /// because its contribution can no longer be reversed exactly.
    #[error(
        "Transaction {transaction_id} cannot be deleted: applied profit is not exactly reversible"
    )]
    ReversalRequired { transaction_id: String },

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    /// Rates that feed a division chain must be strictly positive; zero or
    /// negative values are rejected before any arithmetic runs.
    #[error("Field '{field}' must be a positive value, got {value}")]
    NonPositiveValue { field: String, value: String },

    #[error("Field '{field}' must be a percent in [0, 100], got {value}")]
    PercentOutOfRange { field: String, value: String },

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
