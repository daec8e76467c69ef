use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::tier::PaidTier;

/// Fixed USD→PHP conversion rate. A constant by design: this is a display
/// convenience, not a live market quote.
pub const USD_TO_PHP: Decimal = dec!(56);

/// Fraction of the full twelve-month price charged on the annual cycle
/// (a 15% discount).
const ANNUAL_FACTOR: Decimal = dec!(0.85);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Annual => "annual",
        };
        write!(f, "{name}")
    }
}

/// Flat monthly USD price of a paid tier.
pub fn monthly_price(plan: PaidTier) -> Decimal {
    match plan {
        PaidTier::Premium => dec!(50),
        PaidTier::Unlimited => dec!(150),
    }
}

/// Discounted twelve-month total.
pub fn annual_price(plan: PaidTier) -> Decimal {
    monthly_price(plan) * dec!(12) * ANNUAL_FACTOR
}

pub fn price(plan: PaidTier, cycle: BillingCycle) -> Decimal {
    match cycle {
        BillingCycle::Monthly => monthly_price(plan),
        BillingCycle::Annual => annual_price(plan),
    }
}

/// Price-card labels for the two paid tiers at the given cycle:
/// `$50/mo` / `$150/mo`, or `$510.00/yr` / `$1530.00/yr`.
pub fn price_labels(cycle: BillingCycle) -> (String, String) {
    let label = |plan| match cycle {
        BillingCycle::Monthly => format!("${}/mo", monthly_price(plan)),
        BillingCycle::Annual => format!("${}/yr", format_amount(annual_price(plan))),
    };
    (label(PaidTier::Premium), label(PaidTier::Unlimited))
}

/// Amount due for one plan/cycle selection, carried in both display
/// currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub plan: PaidTier,
    pub cycle: BillingCycle,
    pub usd: Decimal,
    pub php: Decimal,
}

impl PriceQuote {
    pub fn new(plan: PaidTier, cycle: BillingCycle) -> Self {
        let usd = price(plan, cycle);
        Self {
            plan,
            cycle,
            usd,
            php: usd * USD_TO_PHP,
        }
    }

    /// The confirmation-field text: `₱28560.00 (annual) - $510.00`.
    pub fn confirm_label(&self) -> String {
        format!(
            "₱{} ({}) - ${}",
            format_amount(self.php),
            self.cycle,
            format_amount(self.usd)
        )
    }
}

/// Two-decimal display form: `50` → `"50.00"`.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}
