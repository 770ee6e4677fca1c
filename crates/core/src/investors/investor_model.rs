//! Investor domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::rates::RoiRange;

/// Link between an investor and the broker who referred them.
///
/// The optional override range replaces the broker's default commission
/// bounds for this investor only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerLink {
    pub broker_id: String,
    pub override_range: Option<RoiRange>,
}

/// Domain model representing an investor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: String,
    pub name: String,
    /// USD principal.
    pub invested_amount: Decimal,
    /// AED per USD applied to this investor's principal.
    pub aed_conversion_rate: Decimal,
    /// Daily ROI percent bounds.
    pub roi_range: RoiRange,
    /// Cumulative paid profit, AED. Mutated only by the daily accrual step
    /// and extra-profit resolution.
    pub total_profit: Decimal,
    pub balance_usdt: Decimal,
    /// Inactive investors are excluded from allocation. Investors are
    /// soft-deactivated, never hard-deleted while payouts reference them.
    pub active: bool,
    pub broker_link: Option<BrokerLink>,
}

impl Investor {
    /// Principal expressed in AED.
    pub fn invested_amount_aed(&self) -> Decimal {
        self.invested_amount * self.aed_conversion_rate
    }
}

/// Input model for registering a new investor.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestor {
    pub id: Option<String>,
    pub name: String,
    pub invested_amount: Decimal,
    pub aed_conversion_rate: Decimal,
    pub roi_range: RoiRange,
    pub broker_link: Option<BrokerLink>,
}

impl NewInvestor {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.invested_amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "investedAmount must be non-negative, got {}",
                self.invested_amount
            ))
            .into());
        }
        if self.aed_conversion_rate <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveValue {
                field: "aedConversionRate".to_string(),
                value: self.aed_conversion_rate.to_string(),
            }
            .into());
        }
        self.roi_range.validate("roiRange")?;
        if let Some(link) = &self.broker_link {
            if let Some(range) = &link.override_range {
                range.validate("brokerLink.overrideRange")?;
            }
        }
        Ok(())
    }
}
