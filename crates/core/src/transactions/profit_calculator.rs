//! Pure profit arithmetic for both arbitrage legs, plus the investment
//! ceiling check that feeds the extra-profit workflow.
//!
//! All functions reject zero or negative inputs before any arithmetic runs,
//! so division by zero never reaches the computation. Negative profit and
//! ROI (a loss) propagate unclamped.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};

/// Computed result of an INR-leg transaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InrProfit {
    pub profit_inr: Decimal,
    pub profit_aed: Decimal,
    pub roi_percent: Decimal,
}

/// Computed result of a UAE-leg transaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UaeProfit {
    pub profit_aed: Decimal,
    pub roi_percent: Decimal,
}

/// Outcome of the investment-ceiling check.
#[derive(Debug, Clone, PartialEq)]
pub enum CeilingOutcome {
    /// Whole amount fits under the ceiling; all profit flows normally.
    Within,
    /// The amount pushes past the ceiling. Only `retained_profit_aed` flows
    /// into normal allocation; the excess is parked as a pending allocation.
    Exceeded {
        /// USD portion of the amount beyond the ceiling.
        extra_amount: Decimal,
        /// Non-negative AED profit magnitude attributable to the excess.
        extra_profit_amount: Decimal,
        /// Sign-preserving profit share of the non-excess portion.
        retained_profit_aed: Decimal,
    },
}

/// Stateless calculator for transaction profit.
pub struct TransactionProfitCalculator;

impl TransactionProfitCalculator {
    /// INR leg: the AED principal buys USDT at `aed_to_usdt`, the USDT sells
    /// in India at `usdt_selling_inr`, and the proceeds are measured against
    /// the direct AED->INR conversion of the same principal.
    pub fn compute_inr_profit(
        amount: Decimal,
        aed_conversion_rate: Decimal,
        aed_to_usdt: Decimal,
        inr_to_aed: Decimal,
        usdt_selling_inr: Decimal,
    ) -> Result<InrProfit> {
        require_positive("amount", amount)?;
        require_positive("aedConversionRate", aed_conversion_rate)?;
        require_positive("aedToUsdt", aed_to_usdt)?;
        require_positive("inrToAed", inr_to_aed)?;
        require_positive("usdtSellingInr", usdt_selling_inr)?;

        let aed_principal = amount * aed_conversion_rate;
        let usdt_acquired = aed_principal / aed_to_usdt;
        let inr_proceeds = usdt_acquired * usdt_selling_inr;
        let inr_cost = aed_principal * inr_to_aed;

        let profit_inr = (inr_proceeds - inr_cost).round_dp(DECIMAL_PRECISION);
        let profit_aed = (profit_inr / inr_to_aed).round_dp(DECIMAL_PRECISION);
        let roi_percent = (profit_aed / aed_principal * dec!(100)).round_dp(DECIMAL_PRECISION);

        Ok(InrProfit {
            profit_inr,
            profit_aed,
            roi_percent,
        })
    }

    /// UAE leg: the AED principal buys USDT at `usdt_buy_rate` and sells it
    /// back at `usdt_sell_rate`.
    pub fn compute_uae_profit(
        amount: Decimal,
        aed_conversion_rate: Decimal,
        usdt_buy_rate: Decimal,
        usdt_sell_rate: Decimal,
    ) -> Result<UaeProfit> {
        require_positive("amount", amount)?;
        require_positive("aedConversionRate", aed_conversion_rate)?;
        require_positive("usdtBuyRate", usdt_buy_rate)?;
        require_positive("usdtSellRate", usdt_sell_rate)?;

        let aed_principal = amount * aed_conversion_rate;
        let usdt_acquired = aed_principal / usdt_buy_rate;
        let aed_proceeds = usdt_acquired * usdt_sell_rate;

        let profit_aed = (aed_proceeds - aed_principal).round_dp(DECIMAL_PRECISION);
        let roi_percent = (profit_aed / aed_principal * dec!(100)).round_dp(DECIMAL_PRECISION);

        Ok(UaeProfit {
            profit_aed,
            roi_percent,
        })
    }

    /// Checks whether `amount` pushes the pool's running invested total past
    /// the ceiling. The excess is never silently capped: its profit share is
    /// split out so the caller can park it as a pending allocation.
    ///
    /// The excess profit is prorated linearly by amount. For a loss the
    /// parked magnitude is still positive (exposure that must be assigned
    /// somewhere) while the retained share keeps its sign.
    pub fn check_ceiling(
        invested_total: Decimal,
        amount: Decimal,
        profit_aed: Decimal,
        investment_ceiling: Decimal,
    ) -> Result<CeilingOutcome> {
        require_positive("amount", amount)?;
        if invested_total < Decimal::ZERO || investment_ceiling < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "investedTotal and investmentCeiling must be non-negative".to_string(),
            )
            .into());
        }

        let projected = invested_total + amount;
        if projected <= investment_ceiling {
            return Ok(CeilingOutcome::Within);
        }

        let extra_amount = (projected - investment_ceiling).min(amount);
        let excess_share = profit_aed * extra_amount / amount;

        Ok(CeilingOutcome::Exceeded {
            extra_amount,
            extra_profit_amount: excess_share.abs(),
            retained_profit_aed: profit_aed - excess_share,
        })
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
