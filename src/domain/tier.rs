use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription tier of the active session.
///
/// Selects the magnitude threshold applied to every computed result. Mutated
/// only by a successful (simulated) payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Premium,
    Unlimited,
}

impl Tier {
    /// Largest result magnitude this tier may display. Results with
    /// `abs(result) >= limit` are gated behind the upgrade flow.
    pub fn limit(self) -> f64 {
        match self {
            Tier::Free => 1_000.0,
            Tier::Premium => 10_000.0,
            Tier::Unlimited => f64::INFINITY,
        }
    }

    /// Badge text shown next to the display.
    pub fn badge_label(self) -> &'static str {
        match self {
            Tier::Free => "FREE TIER (< 1000)",
            Tier::Premium => "PREMIUM (< 10,000)",
            Tier::Unlimited => "UNLIMITED ∞",
        }
    }

    pub fn is_paid(self) -> bool {
        !matches!(self, Tier::Free)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Free => "free",
            Tier::Premium => "premium",
            Tier::Unlimited => "unlimited",
        };
        write!(f, "{name}")
    }
}

/// The purchasable subset of [`Tier`]. Keeps "upgrade to free" out of the
/// type system entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaidTier {
    Premium,
    Unlimited,
}

impl From<PaidTier> for Tier {
    fn from(plan: PaidTier) -> Self {
        match plan {
            PaidTier::Premium => Tier::Premium,
            PaidTier::Unlimited => Tier::Unlimited,
        }
    }
}

impl fmt::Display for PaidTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Tier::from(*self))
    }
}
