//! Arbitrage transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// The two arbitrage legs the desk trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Inr,
    Uae,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Inr => "INR",
            TransactionType::Uae => "UAE",
        }
    }
}

/// An INR-leg transaction: AED buys USDT, USDT sells for INR, profit compared
/// against the direct AED->INR cost basis. Immutable once profit is computed,
/// except for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InrTransaction {
    pub id: String,
    /// USD notional.
    pub amount: Decimal,
    pub transaction_date: NaiveDate,
    /// AED per USDT on the buy side.
    pub aed_to_usdt: Decimal,
    /// INR per AED.
    pub inr_to_aed: Decimal,
    /// INR per USDT on the sell side.
    pub usdt_selling_inr: Decimal,
    pub profit_inr: Decimal,
    pub profit_aed: Decimal,
    pub roi_percent: Decimal,
    /// Portion of `profit_aed` flowing into normal allocation. Differs from
    /// `profit_aed` only when the ceiling was breached.
    pub retained_profit_aed: Decimal,
    /// Pending extra-profit allocation created with this transaction, if any.
    pub extra_allocation_id: Option<String>,
}

/// A UAE-leg transaction: AED buys USDT and sells it back at a higher AED
/// price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UaeTransaction {
    pub id: String,
    pub amount: Decimal,
    pub transaction_date: NaiveDate,
    /// AED per USDT on the buy side.
    pub usdt_buy_rate: Decimal,
    /// AED per USDT on the sell side.
    pub usdt_sell_rate: Decimal,
    pub profit_aed: Decimal,
    pub roi_percent: Decimal,
    pub retained_profit_aed: Decimal,
    pub extra_allocation_id: Option<String>,
}

/// Input model for an INR transaction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewInrTransaction {
    pub id: Option<String>,
    pub amount: Decimal,
    pub transaction_date: NaiveDate,
    pub aed_to_usdt: Decimal,
    pub inr_to_aed: Decimal,
    pub usdt_selling_inr: Decimal,
}

impl NewInrTransaction {
    pub fn validate(&self) -> Result<()> {
        require_positive("amount", self.amount)?;
        require_positive("aedToUsdt", self.aed_to_usdt)?;
        require_positive("inrToAed", self.inr_to_aed)?;
        require_positive("usdtSellingInr", self.usdt_selling_inr)
    }
}

/// Input model for a UAE transaction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewUaeTransaction {
    pub id: Option<String>,
    pub amount: Decimal,
    pub transaction_date: NaiveDate,
    pub usdt_buy_rate: Decimal,
    pub usdt_sell_rate: Decimal,
}

impl NewUaeTransaction {
    pub fn validate(&self) -> Result<()> {
        require_positive("amount", self.amount)?;
        require_positive("usdtBuyRate", self.usdt_buy_rate)?;
        require_positive("usdtSellRate", self.usdt_sell_rate)
    }
}

/// Either transaction variant, for unified reads and deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum TransactionRecord {
    Inr(InrTransaction),
    Uae(UaeTransaction),
}

impl TransactionRecord {
    pub fn id(&self) -> &str {
        match self {
            TransactionRecord::Inr(t) => &t.id,
            TransactionRecord::Uae(t) => &t.id,
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        match self {
            TransactionRecord::Inr(_) => TransactionType::Inr,
            TransactionRecord::Uae(_) => TransactionType::Uae,
        }
    }

    pub fn profit_aed(&self) -> Decimal {
        match self {
            TransactionRecord::Inr(t) => t.profit_aed,
            TransactionRecord::Uae(t) => t.profit_aed,
        }
    }

    pub fn retained_profit_aed(&self) -> Decimal {
        match self {
            TransactionRecord::Inr(t) => t.retained_profit_aed,
            TransactionRecord::Uae(t) => t.retained_profit_aed,
        }
    }

    pub fn extra_allocation_id(&self) -> Option<&str> {
        match self {
            TransactionRecord::Inr(t) => t.extra_allocation_id.as_deref(),
            TransactionRecord::Uae(t) => t.extra_allocation_id.as_deref(),
        }
    }
}

fn require_positive(field: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveValue {
            field: field.to_string(),
            value: value.to_string(),
        }
        .into());
    }
    Ok(())
}
