//! Broker commission skim computation.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::brokers::Broker;
use crate::errors::{AllocationError, Result, ValidationError};

use super::allocation_model::{BrokerDailyCommission, InvestorDailyProfit};
use super::roi_policy::RoiSelectionPolicy;

/// Computes each broker's commission skim from the day's investor profits.
///
/// The skim is accounted against the admin pool, never subtracted from the
/// investor's own recorded profit. Investors without a broker link contribute
/// nothing here.
pub struct BrokerCommissionAllocator;

impl BrokerCommissionAllocator {
    /// `prior_commission_totals` overrides a broker's cumulative baseline;
    /// used by force-replace runs where the roster still carries the day
    /// being replaced. Absent entries fall back to the roster's
    /// `total_commission_aed`.
    pub fn allocate(
        investor_profits: &[InvestorDailyProfit],
        brokers: &[Broker],
        prior_commission_totals: &HashMap<String, Decimal>,
        policy: &dyn RoiSelectionPolicy,
    ) -> Result<(Decimal, Vec<BrokerDailyCommission>)> {
        let broker_by_id: HashMap<&str, &Broker> =
            brokers.iter().map(|b| (b.id.as_str(), b)).collect();

        let mut daily_by_broker: HashMap<String, Decimal> = HashMap::new();
        let mut investors_by_broker: HashMap<String, u32> = HashMap::new();

        for profit in investor_profits {
            let link = match &profit.broker_link {
                Some(link) => link,
                None => continue,
            };

            let broker = broker_by_id.get(link.broker_id.as_str()).ok_or_else(|| {
                AllocationError::Calculation(format!(
                    "investor {} links to unknown broker {}",
                    profit.investor_id, link.broker_id
                ))
            })?;

            let range = link.override_range.unwrap_or(broker.commission_range);
            let rate = policy.select_rate(&range);
            if rate < Decimal::ZERO || rate > dec!(100) {
                return Err(ValidationError::PercentOutOfRange {
                    field: format!("brokerRate({})", broker.id),
                    value: rate.to_string(),
                }
                .into());
            }

            // A 100% skim is the hard ceiling: commission never exceeds the
            // investor's own daily profit magnitude.
            let commission = (profit.daily_profit * rate / dec!(100))
                .min(profit.daily_profit.abs());

            *daily_by_broker
                .entry(broker.id.clone())
                .or_insert(Decimal::ZERO) += commission;
            *investors_by_broker.entry(broker.id.clone()).or_insert(0) += 1;
        }

        let mut total_commission = Decimal::ZERO;
        let mut per_broker: Vec<BrokerDailyCommission> = daily_by_broker
            .into_iter()
            .map(|(broker_id, daily_commission)| {
                total_commission += daily_commission;
                let prior = prior_commission_totals
                    .get(&broker_id)
                    .copied()
                    .unwrap_or_else(|| {
                        broker_by_id
                            .get(broker_id.as_str())
                            .map(|b| b.total_commission_aed)
                            .unwrap_or(Decimal::ZERO)
                    });
                let investor_count = investors_by_broker
                    .get(&broker_id)
                    .copied()
                    .unwrap_or_default();
                BrokerDailyCommission {
                    total_commission: prior + daily_commission,
                    broker_id,
                    daily_commission,
                    investor_count,
                }
            })
            .collect();
        per_broker.sort_by(|a, b| a.broker_id.cmp(&b.broker_id));

        Ok((total_commission, per_broker))
    }
}
