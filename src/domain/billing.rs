use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::pricing::BillingCycle;
use crate::domain::tier::PaidTier;
use crate::error::PaymentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Gcash,
    Maya,
}

impl PaymentMethod {
    /// Destination wallet the buyer is told to send funds to.
    pub fn account(self) -> &'static PaymentAccount {
        match self {
            PaymentMethod::Gcash => &GCASH_ACCOUNT,
            PaymentMethod::Maya => &MAYA_ACCOUNT,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Gcash => "gcash",
            PaymentMethod::Maya => "maya",
        };
        write!(f, "{name}")
    }
}

/// A receiving wallet account. Process-wide constants; no gateway exists
/// behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentAccount {
    pub number: &'static str,
    pub name: &'static str,
}

pub const GCASH_ACCOUNT: PaymentAccount = PaymentAccount {
    number: "09342342424",
    name: "Calculator Pro Services",
};

pub const MAYA_ACCOUNT: PaymentAccount = PaymentAccount {
    number: "09876543210",
    name: "Calculator Pro Services",
};

/// The plan/cycle/wallet choices made inside the upgrade modal. The cycle
/// survives a modal close; plan and method do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BillingSelection {
    pub cycle: BillingCycle,
    pub plan: Option<PaidTier>,
    pub method: Option<PaymentMethod>,
}

impl BillingSelection {
    /// Choosing a plan invalidates any previously chosen wallet.
    pub fn select_plan(&mut self, plan: PaidTier) {
        self.plan = Some(plan);
        self.method = None;
    }

    pub fn reset(&mut self) {
        self.plan = None;
        self.method = None;
    }
}

/// Sender details submitted with a payment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentForm {
    pub sender_name: String,
    pub sender_number: String,
    pub email: String,
}

impl PaymentForm {
    pub fn new(
        sender_name: impl Into<String>,
        sender_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            sender_name: sender_name.into(),
            sender_number: sender_number.into(),
            email: email.into(),
        }
    }

    /// Field checks in presentation order: completeness, then the mobile
    /// number format.
    pub fn validate(&self) -> Result<(), PaymentError> {
        if self.sender_name.is_empty() || self.sender_number.is_empty() || self.email.is_empty() {
            return Err(PaymentError::MissingFields);
        }
        if !is_valid_mobile_number(&self.sender_number) {
            return Err(PaymentError::InvalidMobileNumber);
        }
        Ok(())
    }
}

/// Philippine mobile numbers: exactly 11 characters starting with `09`.
pub fn is_valid_mobile_number(number: &str) -> bool {
    number.chars().count() == 11 && number.starts_with("09")
}
