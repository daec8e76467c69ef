use std::io::Write;

use crate::domain::billing::{PaymentAccount, PaymentMethod};
use crate::domain::ports::Presenter;
use crate::domain::tier::{PaidTier, Tier};

/// Renders session notifications as plain terminal lines.
///
/// Write failures are swallowed: the port has no failure channel, and a
/// closed pipe should not take the session down with it.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn display_changed(&mut self, value: &str, tier: Tier) {
        let _ = writeln!(self.out, "[{}] {}", tier.badge_label(), value);
    }

    fn upgrade_requested(&mut self, message: &str) {
        let _ = writeln!(self.out, "\n!! {message}");
    }

    fn upgrade_closed(&mut self) {
        let _ = writeln!(self.out, "(upgrade window closed)");
    }

    fn pricing_changed(&mut self, premium_label: &str, unlimited_label: &str) {
        let _ = writeln!(
            self.out,
            "Premium: {premium_label}  Unlimited: {unlimited_label}"
        );
    }

    fn plan_selected(&mut self, plan: PaidTier, confirm_amount: &str) {
        let _ = writeln!(self.out, "Selected plan {plan}: {confirm_amount}");
    }

    fn payment_method_selected(&mut self, method: PaymentMethod, account: &PaymentAccount) {
        let _ = writeln!(
            self.out,
            "Send {method} payment to {} ({})",
            account.number, account.name
        );
    }

    fn payment_result(&mut self, summary: &str) {
        let _ = writeln!(self.out, "\n{summary}\n");
    }

    fn validation_error(&mut self, reason: &str) {
        let _ = writeln!(self.out, "!! {reason}");
    }
}
