//! Rate configuration domain models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// An inclusive percent range used for daily ROI and broker commission bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl RoiRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// A degenerate range pinning the rate to a single value.
    pub fn flat(rate: Decimal) -> Self {
        Self {
            min: rate,
            max: rate,
        }
    }

    /// Validates `0 <= min <= max <= 100`, naming `field` in the error.
    pub fn validate(&self, field: &str) -> Result<()> {
        if self.min < Decimal::ZERO || self.max > dec!(100) {
            return Err(ValidationError::PercentOutOfRange {
                field: field.to_string(),
                value: format!("[{}, {}]", self.min, self.max),
            }
            .into());
        }
        if self.min > self.max {
            return Err(ValidationError::InvalidInput(format!(
                "{}: min {} exceeds max {}",
                field, self.min, self.max
            ))
            .into());
        }
        Ok(())
    }

    pub fn midpoint(&self) -> Decimal {
        (self.min + self.max) / dec!(2)
    }

    pub fn contains(&self, rate: Decimal) -> bool {
        rate >= self.min && rate <= self.max
    }
}

/// How the residual admin profit pool is divided among admin principals.
///
/// Kept as configuration rather than a hard-coded 50/50 literal so the design
/// generalizes if the principal count ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSplitConfig {
    pub ratios: Vec<Decimal>,
}

impl Default for AdminSplitConfig {
    fn default() -> Self {
        Self {
            ratios: vec![dec!(0.5), dec!(0.5)],
        }
    }
}

impl AdminSplitConfig {
    /// Validates the ratio vector: non-empty, each ratio in [0, 1], summing
    /// exactly to 1.
    pub fn validate(&self) -> Result<()> {
        if self.ratios.is_empty() {
            return Err(ValidationError::MissingField("adminSplit.ratios".to_string()).into());
        }
        for (i, ratio) in self.ratios.iter().enumerate() {
            if *ratio < Decimal::ZERO || *ratio > Decimal::ONE {
                return Err(ValidationError::InvalidInput(format!(
                    "adminSplit.ratios[{}] must be in [0, 1], got {}",
                    i, ratio
                ))
                .into());
            }
        }
        let sum: Decimal = self.ratios.iter().sum();
        if sum != Decimal::ONE {
            return Err(ValidationError::InvalidInput(format!(
                "adminSplit.ratios must sum to 1, got {}",
                sum
            ))
            .into());
        }
        Ok(())
    }
}

/// Engine-wide rate configuration supplied by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateConfig {
    /// AED per USD, used to express USD principals in AED.
    pub aed_conversion_rate: Decimal,
    /// USD ceiling on total invested-plus-incoming amount per pool; amounts
    /// beyond it trigger the extra-profit workflow instead of normal
    /// allocation.
    pub investment_ceiling: Decimal,
    pub admin_split: AdminSplitConfig,
}

impl RateConfig {
    pub fn new(aed_conversion_rate: Decimal, investment_ceiling: Decimal) -> Self {
        Self {
            aed_conversion_rate,
            investment_ceiling,
            admin_split: AdminSplitConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.aed_conversion_rate <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveValue {
                field: "aedConversionRate".to_string(),
                value: self.aed_conversion_rate.to_string(),
            }
            .into());
        }
        if self.investment_ceiling < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "investmentCeiling must be non-negative, got {}",
                self.investment_ceiling
            ))
            .into());
        }
        self.admin_split.validate()
    }
}
