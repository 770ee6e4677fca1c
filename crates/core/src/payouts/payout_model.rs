//! Unified payout ledger models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{ADMIN_A_ID, ADMIN_B_ID};
use crate::errors::{Result, ValidationError};

/// Who received a payout. Admin principals are fixed identities; investors
/// and brokers are referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "id")]
pub enum PayoutRecipient {
    AdminA,
    AdminB,
    Investor(String),
    Broker(String),
}

impl PayoutRecipient {
    /// Ledger identity string used by the persistence layer for filtering.
    pub fn ledger_id(&self) -> &str {
        match self {
            PayoutRecipient::AdminA => ADMIN_A_ID,
            PayoutRecipient::AdminB => ADMIN_B_ID,
            PayoutRecipient::Investor(id) => id,
            PayoutRecipient::Broker(id) => id,
        }
    }
}

/// A single entry in the unified payout ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: String,
    pub recipient: PayoutRecipient,
    pub amount_aed: Decimal,
    pub payout_date: NaiveDate,
}

/// Input model for recording a payout.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPayout {
    pub id: Option<String>,
    pub recipient: PayoutRecipient,
    pub amount_aed: Decimal,
    pub payout_date: NaiveDate,
}

impl NewPayout {
    pub fn validate(&self) -> Result<()> {
        if self.amount_aed <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveValue {
                field: "amountAed".to_string(),
                value: self.amount_aed.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
