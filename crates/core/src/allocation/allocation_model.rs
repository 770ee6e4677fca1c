//! Daily accrual and admin split domain models.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::investors::BrokerLink;

/// Business-day gate status for a calendar date, queryable so the UI can
/// distinguish "no profit because weekend" from "calculation failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekdayStatus {
    BusinessDay,
    Weekend,
}

impl WeekdayStatus {
    pub fn for_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => WeekdayStatus::Weekend,
            _ => WeekdayStatus::BusinessDay,
        }
    }

    pub fn is_business_day(&self) -> bool {
        *self == WeekdayStatus::BusinessDay
    }
}

/// One investor's share of a day's accrual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorDailyProfit {
    pub investor_id: String,
    /// AED.
    pub daily_profit: Decimal,
    /// The percent rate actually applied, as yielded by the selection policy.
    pub daily_roi_used: Decimal,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub broker_link: Option<BrokerLink>,
}

/// One broker's commission aggregate for a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerDailyCommission {
    pub broker_id: String,
    /// AED skimmed this day across all linked investors.
    pub daily_commission: Decimal,
    /// Broker's cumulative commission after this accrual is applied.
    pub total_commission: Decimal,
    /// Distinct investors contributing to this day's commission.
    pub investor_count: u32,
}

/// A committed (or about-to-commit) daily allocation, keyed by date. The
/// per-day idempotency ledger stores exactly this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAccrual {
    pub accrual_date: NaiveDate,
    pub total_daily_profit: Decimal,
    pub per_investor: Vec<InvestorDailyProfit>,
    pub total_commission: Decimal,
    pub per_broker: Vec<BrokerDailyCommission>,
}

/// Result of `allocate_daily`. A weekend skip is a recognized non-error
/// outcome, not a failure and not success-with-zero-profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum DailyAllocationOutcome {
    Completed(DailyAccrual),
    WeekdaySkipped { date: NaiveDate },
}

/// Derived admin split, computed on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSplit {
    /// Transaction profit minus investor profit minus broker commission.
    /// Negative values (a loss) are reported as-is, never clamped.
    pub net_profit: Decimal,
    pub admin_total_profit: Decimal,
    pub admin_a_profit: Decimal,
    pub admin_b_profit: Decimal,
    /// Profit share minus cumulative payouts; may go negative and is
    /// surfaced as such.
    pub admin_a_available: Decimal,
    pub admin_b_available: Decimal,
}

/// Read-only broker aggregate for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerCommissionSummary {
    pub broker_id: String,
    pub broker_name: String,
    pub total_commission_aed: Decimal,
    pub investor_count: u32,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_status_weekend_detection() {
        // 2025-06-14 is a Saturday, 2025-06-15 a Sunday, 2025-06-16 a Monday.
        let saturday = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();

        assert_eq!(WeekdayStatus::for_date(saturday), WeekdayStatus::Weekend);
        assert_eq!(WeekdayStatus::for_date(sunday), WeekdayStatus::Weekend);
        assert_eq!(WeekdayStatus::for_date(monday), WeekdayStatus::BusinessDay);
        assert!(WeekdayStatus::for_date(monday).is_business_day());
    }
}
