//! Broker domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::rates::RoiRange;

/// Domain model representing a broker.
///
/// Commission bounds are a fraction of the referred investor's profit, not of
/// the investor's principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broker {
    pub id: String,
    pub name: String,
    /// Default commission percent bounds applied to linked investors that
    /// carry no per-investor override.
    pub commission_range: RoiRange,
    /// Cumulative commission, AED.
    pub total_commission_aed: Decimal,
    pub active: bool,
}

/// Input model for registering a new broker.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBroker {
    pub id: Option<String>,
    pub name: String,
    pub commission_range: RoiRange,
}

impl NewBroker {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        self.commission_range.validate("commissionRange")
    }
}
