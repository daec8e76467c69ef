use tracing::{debug, info};

use crate::domain::billing::{BillingSelection, PaymentForm, PaymentMethod};
use crate::domain::calculator::{Calculator, EvalOutcome, Operator};
use crate::domain::ports::PresenterBox;
use crate::domain::pricing::{BillingCycle, PriceQuote, format_amount, price_labels};
use crate::domain::tier::{PaidTier, Tier};
use crate::error::PaymentError;

/// A single user's calculator session.
///
/// Owns every piece of mutable state (calculator, tier, billing selection)
/// and the presenter port. All operations run synchronously to completion;
/// the session is the only writer, so the sequential-consistency story is
/// simply "one method at a time".
pub struct CalculatorSession {
    calculator: Calculator,
    tier: Tier,
    billing: BillingSelection,
    presenter: PresenterBox,
}

impl CalculatorSession {
    /// Creates a session on the free tier and renders the initial display.
    pub fn new(presenter: PresenterBox) -> Self {
        let mut session = Self {
            calculator: Calculator::new(),
            tier: Tier::default(),
            billing: BillingSelection::default(),
            presenter,
        };
        session.refresh_display();
        session
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn billing(&self) -> &BillingSelection {
        &self.billing
    }

    /// Feeds one digit or decimal-point token into the current operand.
    pub fn append(&mut self, token: char) {
        if self.calculator.append(token) {
            self.refresh_display();
        }
    }

    /// Stages a binary operator, evaluating any already-pending pair first
    /// so chains like `3 + 4 *` compute `3 + 4` before `*` takes over.
    /// Staging happens even when that evaluation errored or hit the tier
    /// gate; the stale operand then rides along exactly as typed.
    pub fn set_operator(&mut self, op: Operator) {
        if self.calculator.has_pending() {
            self.evaluate();
        }
        self.calculator.stage_operator(op);
        debug!(operator = %op, "operator staged");
    }

    /// Evaluates the pending operation, applying the tier gate to the
    /// result. A gated result leaves the whole pending calculation intact
    /// and routes to the upgrade flow instead.
    pub fn evaluate(&mut self) {
        match self.calculator.compute() {
            EvalOutcome::Idle => {}
            EvalOutcome::DivideByZero => {
                self.calculator.mark_error();
                self.refresh_display();
            }
            EvalOutcome::Value(result) => {
                if result.abs() >= self.tier.limit() {
                    info!(result, tier = %self.tier, "result exceeds tier limit");
                    self.request_upgrade(result);
                } else {
                    self.calculator.commit(result);
                    self.refresh_display();
                }
            }
        }
    }

    /// Resets the calculator unconditionally.
    pub fn clear(&mut self) {
        self.calculator.clear();
        self.refresh_display();
    }

    fn request_upgrade(&mut self, result: f64) {
        let message = match self.tier {
            Tier::Free => format!(
                "Result ({result:.2}) exceeds free tier limit of 1,000. \
                 Upgrade to Premium or Unlimited!"
            ),
            Tier::Premium => format!(
                "Result ({result:.2}) exceeds premium tier limit of 10,000. \
                 Upgrade to Unlimited!"
            ),
            // Infinite limit; nothing can reach here and there is nothing
            // left to sell.
            Tier::Unlimited => return,
        };
        self.presenter.upgrade_requested(&message);
    }

    /// Switches the billing cycle and republishes both price labels.
    pub fn set_billing_cycle(&mut self, cycle: BillingCycle) {
        self.billing.cycle = cycle;
        let (premium, unlimited) = price_labels(cycle);
        self.presenter.pricing_changed(&premium, &unlimited);
    }

    /// Chooses a plan to buy: clears any wallet choice, quotes the amount
    /// due at the current cycle.
    pub fn select_plan(&mut self, plan: PaidTier) {
        self.billing.select_plan(plan);
        let quote = PriceQuote::new(plan, self.billing.cycle);
        self.presenter.plan_selected(plan, &quote.confirm_label());
    }

    /// Chooses the wallet and surfaces the destination account.
    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.billing.method = Some(method);
        self.presenter
            .payment_method_selected(method, method.account());
    }

    /// Validates and "processes" a payment. No funds move: success means
    /// the confirmation summary is presented, the tier is upgraded, and the
    /// modal closes (which clears the calculator, in-progress work
    /// included). Failures are surfaced through the presenter and leave all
    /// state untouched.
    pub fn process_payment(&mut self, form: &PaymentForm) -> Result<(), PaymentError> {
        match self.try_payment(form) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.presenter.validation_error(&e.to_string());
                Err(e)
            }
        }
    }

    fn try_payment(&mut self, form: &PaymentForm) -> Result<(), PaymentError> {
        let Some(method) = self.billing.method else {
            return Err(PaymentError::MethodRequired);
        };
        form.validate()?;
        let Some(plan) = self.billing.plan else {
            return Err(PaymentError::PlanRequired);
        };

        let quote = PriceQuote::new(plan, self.billing.cycle);
        let summary = payment_summary(&quote, method, form);
        self.presenter.payment_result(&summary);

        self.tier = plan.into();
        info!(tier = %self.tier, "tier upgraded");
        self.close_modal();
        Ok(())
    }

    /// Hides the upgrade surfaces, forgets plan/method choices, and clears
    /// the calculator — discarding whatever computation opened the modal.
    pub fn close_modal(&mut self) {
        self.presenter.upgrade_closed();
        self.billing.reset();
        self.clear();
    }

    fn refresh_display(&mut self) {
        self.presenter
            .display_changed(self.calculator.current(), self.tier);
    }
}

fn payment_summary(quote: &PriceQuote, method: PaymentMethod, form: &PaymentForm) -> String {
    let account = method.account();
    format!(
        "Payment Confirmation\n\n\
         Plan: {plan}\n\
         Billing: {cycle}\n\
         Amount: ₱{php} (${usd})\n\n\
         Payment Method: {method}\n\
         Send to: {number}\n\n\
         Sender: {sender}\n\
         Contact: {contact}\n\n\
         Please send the payment to the account above and our team will \
         verify your payment within 24 hours. You will receive a \
         confirmation email at {email}.",
        plan = quote.plan.to_string().to_uppercase(),
        cycle = quote.cycle,
        php = format_amount(quote.php),
        usd = format_amount(quote.usd),
        method = method.to_string().to_uppercase(),
        number = account.number,
        sender = form.sender_name,
        contact = form.sender_number,
        email = form.email,
    )
}
