//! Per-investor daily profit computation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{Result, ValidationError};
use crate::investors::Investor;

use super::allocation_model::InvestorDailyProfit;
use super::roi_policy::RoiSelectionPolicy;

/// Computes each active investor's daily profit from the rate the selection
/// policy yields for their configured range. Pure: no awareness of dates,
/// idempotency, or persistence.
pub struct InvestorProfitAllocator;

impl InvestorProfitAllocator {
    pub fn allocate(
        investors: &[Investor],
        policy: &dyn RoiSelectionPolicy,
    ) -> Result<(Decimal, Vec<InvestorDailyProfit>)> {
        let mut total_daily_profit = Decimal::ZERO;
        let mut per_investor = Vec::with_capacity(investors.len());

        for investor in investors.iter().filter(|i| i.active) {
            let daily_roi = policy.select_rate(&investor.roi_range);
            if daily_roi < Decimal::ZERO || daily_roi > dec!(100) {
                return Err(ValidationError::PercentOutOfRange {
                    field: format!("dailyRoi({})", investor.id),
                    value: daily_roi.to_string(),
                }
                .into());
            }

            let daily_profit = investor.invested_amount_aed() * daily_roi / dec!(100);
            total_daily_profit += daily_profit;
            per_investor.push(InvestorDailyProfit {
                investor_id: investor.id.clone(),
                daily_profit,
                daily_roi_used: daily_roi,
                broker_link: investor.broker_link.clone(),
            });
        }

        Ok((total_daily_profit, per_investor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::roi_policy::{FixedRate, Midpoint};
    use crate::investors::BrokerLink;
    use crate::rates::RoiRange;

    fn investor(id: &str, invested_usd: Decimal, active: bool) -> Investor {
        Investor {
            id: id.to_string(),
            name: id.to_string(),
            invested_amount: invested_usd,
            aed_conversion_rate: dec!(1),
            roi_range: RoiRange::new(dec!(0.5), dec!(1.5)),
            total_profit: Decimal::ZERO,
            balance_usdt: Decimal::ZERO,
            active,
            broker_link: None,
        }
    }

    #[test]
    fn test_flat_one_percent_on_ten_thousand_aed() {
        let investors = vec![investor("inv-1", dec!(10000), true)];

        let (total, per_investor) =
            InvestorProfitAllocator::allocate(&investors, &FixedRate(dec!(1.0))).unwrap();

        assert_eq!(total, dec!(100.0));
        assert_eq!(per_investor[0].daily_profit, dec!(100.0));
        assert_eq!(per_investor[0].daily_roi_used, dec!(1.0));
    }

    #[test]
    fn test_inactive_investors_excluded() {
        let investors = vec![
            investor("inv-1", dec!(10000), true),
            investor("inv-2", dec!(50000), false),
        ];

        let (total, per_investor) =
            InvestorProfitAllocator::allocate(&investors, &FixedRate(dec!(1))).unwrap();

        assert_eq!(per_investor.len(), 1);
        assert_eq!(total, dec!(100));
    }

    #[test]
    fn test_midpoint_policy_uses_each_range() {
        let mut a = investor("inv-1", dec!(10000), true);
        a.roi_range = RoiRange::new(dec!(1), dec!(1));
        let mut b = investor("inv-2", dec!(10000), true);
        b.roi_range = RoiRange::new(dec!(1), dec!(3));

        let (total, per_investor) =
            InvestorProfitAllocator::allocate(&[a, b], &Midpoint).unwrap();

        assert_eq!(per_investor[0].daily_roi_used, dec!(1));
        assert_eq!(per_investor[1].daily_roi_used, dec!(2));
        assert_eq!(total, dec!(100) + dec!(200));
    }

    #[test]
    fn test_aed_conversion_applied_to_principal() {
        let mut inv = investor("inv-1", dec!(1000), true);
        inv.aed_conversion_rate = dec!(3.67);

        let (total, _) =
            InvestorProfitAllocator::allocate(&[inv], &FixedRate(dec!(1))).unwrap();

        assert_eq!(total, dec!(36.70));
    }

    #[test]
    fn test_out_of_range_policy_rate_rejected() {
        let investors = vec![investor("inv-1", dec!(10000), true)];
        assert!(InvestorProfitAllocator::allocate(&investors, &FixedRate(dec!(101))).is_err());
        assert!(InvestorProfitAllocator::allocate(&investors, &FixedRate(dec!(-1))).is_err());
    }

    #[test]
    fn test_broker_link_carried_through() {
        let mut inv = investor("inv-1", dec!(10000), true);
        inv.broker_link = Some(BrokerLink {
            broker_id: "brk-1".to_string(),
            override_range: None,
        });

        let (_, per_investor) =
            InvestorProfitAllocator::allocate(&[inv], &FixedRate(dec!(1))).unwrap();

        assert_eq!(
            per_investor[0].broker_link.as_ref().unwrap().broker_id,
            "brk-1"
        );
    }
}
