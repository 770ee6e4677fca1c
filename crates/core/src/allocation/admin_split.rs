//! Residual profit split between the admin principals.

use rust_decimal::Decimal;

use crate::constants::ADMIN_PRINCIPAL_COUNT;
use crate::errors::{Result, ValidationError};
use crate::rates::AdminSplitConfig;

use super::allocation_model::AdminSplit;

/// Computes the derived admin split from cumulative totals. Pure and
/// stateless; callers supply the aggregates.
pub struct AdminSplitCalculator;

impl AdminSplitCalculator {
    /// Divides `total` by the configured ratios. The last principal takes
    /// the remainder, so the shares always sum exactly to `total` whatever
    /// the ratio vector.
    pub fn split_shares(total: Decimal, config: &AdminSplitConfig) -> Result<Vec<Decimal>> {
        config.validate()?;
        let mut shares = Vec::with_capacity(config.ratios.len());
        let mut assigned = Decimal::ZERO;
        for ratio in &config.ratios[..config.ratios.len() - 1] {
            let share = total * ratio;
            assigned += share;
            shares.push(share);
        }
        shares.push(total - assigned);
        Ok(shares)
    }

    /// `net_profit = total_transaction_profit - total_investor_profit -
    /// total_broker_commission`. A negative net profit is a valid, displayed
    /// state; it is never floor-clamped. Available balances may likewise go
    /// negative when payouts exceed the allocated share.
    pub fn compute(
        total_transaction_profit: Decimal,
        total_investor_profit: Decimal,
        total_broker_commission: Decimal,
        admin_a_payouts: Decimal,
        admin_b_payouts: Decimal,
        config: &AdminSplitConfig,
    ) -> Result<AdminSplit> {
        if config.ratios.len() != ADMIN_PRINCIPAL_COUNT {
            return Err(ValidationError::InvalidInput(format!(
                "admin split expects {} principals, config has {}",
                ADMIN_PRINCIPAL_COUNT,
                config.ratios.len()
            ))
            .into());
        }

        let net_profit =
            total_transaction_profit - total_investor_profit - total_broker_commission;
        let admin_total_profit = net_profit;

        let shares = Self::split_shares(admin_total_profit, config)?;
        let admin_a_profit = shares[0];
        let admin_b_profit = shares[1];

        Ok(AdminSplit {
            net_profit,
            admin_total_profit,
            admin_a_profit,
            admin_b_profit,
            admin_a_available: admin_a_profit - admin_a_payouts,
            admin_b_available: admin_b_profit - admin_b_payouts,
        })
    }
}
