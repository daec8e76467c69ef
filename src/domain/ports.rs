use crate::domain::billing::{PaymentAccount, PaymentMethod};
use crate::domain::tier::{PaidTier, Tier};

/// Boundary to the presentation layer.
///
/// The session calls out through this port after every state change worth
/// rendering; implementations decide how (terminal lines, DOM updates, a
/// recorded event log). Nothing flows back in: presentation never mutates
/// core state directly.
pub trait Presenter {
    /// The visible operand or the active tier changed.
    fn display_changed(&mut self, value: &str, tier: Tier);
    /// Open the upgrade surface with this message, replacing any prior one.
    fn upgrade_requested(&mut self, message: &str);
    /// Hide the upgrade and payment surfaces.
    fn upgrade_closed(&mut self);
    /// Billing cycle changed; both price-card labels were recomputed.
    fn pricing_changed(&mut self, premium_label: &str, unlimited_label: &str);
    /// A plan was chosen; pre-fill the confirmation field.
    fn plan_selected(&mut self, plan: PaidTier, confirm_amount: &str);
    /// A wallet was chosen; surface the destination account.
    fn payment_method_selected(&mut self, method: PaymentMethod, account: &PaymentAccount);
    /// Simulated payment went through; present the confirmation summary.
    fn payment_result(&mut self, summary: &str);
    /// Payment submission was rejected; present the reason and re-prompt.
    fn validation_error(&mut self, reason: &str);
}

pub type PresenterBox = Box<dyn Presenter>;
