use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::billing::{PaymentAccount, PaymentMethod};
use crate::domain::ports::Presenter;
use crate::domain::tier::{PaidTier, Tier};

/// Everything a session can tell the presentation layer, captured as data.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    DisplayChanged {
        value: String,
        tier: Tier,
    },
    UpgradeRequested {
        message: String,
    },
    UpgradeClosed,
    PricingChanged {
        premium: String,
        unlimited: String,
    },
    PlanSelected {
        plan: PaidTier,
        confirm_amount: String,
    },
    PaymentMethodSelected {
        method: PaymentMethod,
        account_number: String,
        account_name: String,
    },
    PaymentResult {
        summary: String,
    },
    ValidationError {
        reason: String,
    },
}

/// Captures notifications in order for later inspection.
///
/// Clones share the same event log, so a test keeps one handle while the
/// session owns the other as its boxed presenter. `Rc<RefCell<..>>` is
/// enough: all core state lives on one thread.
#[derive(Default, Clone)]
pub struct RecordingPresenter {
    events: Rc<RefCell<Vec<PresenterEvent>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PresenterEvent> {
        self.events.borrow().clone()
    }

    pub fn last_display(&self) -> Option<String> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                PresenterEvent::DisplayChanged { value, .. } => Some(value.clone()),
                _ => None,
            })
    }

    pub fn last_upgrade_message(&self) -> Option<String> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                PresenterEvent::UpgradeRequested { message } => Some(message.clone()),
                _ => None,
            })
    }

    pub fn last_payment_summary(&self) -> Option<String> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                PresenterEvent::PaymentResult { summary } => Some(summary.clone()),
                _ => None,
            })
    }

    fn push(&mut self, event: PresenterEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Presenter for RecordingPresenter {
    fn display_changed(&mut self, value: &str, tier: Tier) {
        self.push(PresenterEvent::DisplayChanged {
            value: value.to_string(),
            tier,
        });
    }

    fn upgrade_requested(&mut self, message: &str) {
        self.push(PresenterEvent::UpgradeRequested {
            message: message.to_string(),
        });
    }

    fn upgrade_closed(&mut self) {
        self.push(PresenterEvent::UpgradeClosed);
    }

    fn pricing_changed(&mut self, premium_label: &str, unlimited_label: &str) {
        self.push(PresenterEvent::PricingChanged {
            premium: premium_label.to_string(),
            unlimited: unlimited_label.to_string(),
        });
    }

    fn plan_selected(&mut self, plan: PaidTier, confirm_amount: &str) {
        self.push(PresenterEvent::PlanSelected {
            plan,
            confirm_amount: confirm_amount.to_string(),
        });
    }

    fn payment_method_selected(&mut self, method: PaymentMethod, account: &PaymentAccount) {
        self.push(PresenterEvent::PaymentMethodSelected {
            method,
            account_number: account.number.to_string(),
            account_name: account.name.to_string(),
        });
    }

    fn payment_result(&mut self, summary: &str) {
        self.push(PresenterEvent::PaymentResult {
            summary: summary.to_string(),
        });
    }

    fn validation_error(&mut self, reason: &str) {
        self.push(PresenterEvent::ValidationError {
            reason: reason.to_string(),
        });
    }
}
