use crate::application::session::CalculatorSession;
use crate::domain::billing::{PaymentForm, PaymentMethod};
use crate::domain::calculator::Operator;
use crate::domain::pricing::BillingCycle;
use crate::domain::tier::PaidTier;
use crate::error::{CalcError, Result};

/// One line of user input, parsed into a typed action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Digits and decimal points, fed to the calculator one token at a time.
    Entry(String),
    Operator(Operator),
    Evaluate,
    Clear,
    Cycle(BillingCycle),
    Plan(PaidTier),
    Method(PaymentMethod),
    Pay(PaymentForm),
    Close,
    Quit,
}

impl Command {
    /// Parses a single input line. Blank lines parse to `None`; anything
    /// unrecognized is an `UnknownCommand` error the caller can report and
    /// skip.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        if line.len() == 1
            && let Some(op) = Operator::from_symbol(line.chars().next().unwrap_or_default())
        {
            return Ok(Some(Command::Operator(op)));
        }

        let command = match line {
            "=" | "eval" => Command::Evaluate,
            "c" | "clear" => Command::Clear,
            "close" => Command::Close,
            "quit" | "exit" => Command::Quit,
            _ => {
                if let Some(cycle) = line.strip_prefix("cycle ") {
                    Command::Cycle(parse_cycle(cycle.trim())?)
                } else if let Some(plan) = line.strip_prefix("plan ") {
                    Command::Plan(parse_plan(plan.trim())?)
                } else if let Some(method) = line.strip_prefix("method ") {
                    Command::Method(parse_method(method.trim())?)
                } else if let Some(fields) = line.strip_prefix("pay ") {
                    Command::Pay(parse_form(fields))
                } else if line.chars().all(|c| c.is_ascii_digit() || c == '.') {
                    Command::Entry(line.to_string())
                } else {
                    return Err(CalcError::UnknownCommand(line.to_string()));
                }
            }
        };
        Ok(Some(command))
    }

    /// Applies this command to a session. `Quit` is a no-op here: the read
    /// loop owns termination.
    pub fn apply(self, session: &mut CalculatorSession) {
        match self {
            Command::Entry(tokens) => {
                for token in tokens.chars() {
                    session.append(token);
                }
            }
            Command::Operator(op) => session.set_operator(op),
            Command::Evaluate => session.evaluate(),
            Command::Clear => session.clear(),
            Command::Cycle(cycle) => session.set_billing_cycle(cycle),
            Command::Plan(plan) => session.select_plan(plan),
            Command::Method(method) => session.select_payment_method(method),
            // Validation failures were already surfaced through the
            // presenter; the loop keeps going either way.
            Command::Pay(form) => {
                let _ = session.process_payment(&form);
            }
            Command::Close => session.close_modal(),
            Command::Quit => {}
        }
    }
}

fn parse_cycle(value: &str) -> Result<BillingCycle> {
    match value {
        "monthly" => Ok(BillingCycle::Monthly),
        "annual" => Ok(BillingCycle::Annual),
        other => Err(CalcError::UnknownCommand(format!("cycle {other}"))),
    }
}

fn parse_plan(value: &str) -> Result<PaidTier> {
    match value {
        "premium" => Ok(PaidTier::Premium),
        "unlimited" => Ok(PaidTier::Unlimited),
        other => Err(CalcError::UnknownCommand(format!("plan {other}"))),
    }
}

fn parse_method(value: &str) -> Result<PaymentMethod> {
    match value {
        "gcash" => Ok(PaymentMethod::Gcash),
        "maya" => Ok(PaymentMethod::Maya),
        other => Err(CalcError::UnknownCommand(format!("method {other}"))),
    }
}

/// `pay <name>; <number>; <email>`. Missing fields come through empty so
/// the session's own validation rejects them with the proper message.
fn parse_form(fields: &str) -> PaymentForm {
    let mut parts = fields.splitn(3, ';').map(str::trim);
    PaymentForm::new(
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_and_operators() {
        assert_eq!(
            Command::parse("123.45").unwrap(),
            Some(Command::Entry("123.45".to_string()))
        );
        assert_eq!(
            Command::parse("+").unwrap(),
            Some(Command::Operator(Operator::Add))
        );
        assert_eq!(
            Command::parse("/").unwrap(),
            Some(Command::Operator(Operator::Divide))
        );
        assert_eq!(Command::parse("=").unwrap(), Some(Command::Evaluate));
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_billing_commands() {
        assert_eq!(
            Command::parse("cycle annual").unwrap(),
            Some(Command::Cycle(BillingCycle::Annual))
        );
        assert_eq!(
            Command::parse("plan premium").unwrap(),
            Some(Command::Plan(PaidTier::Premium))
        );
        assert_eq!(
            Command::parse("method maya").unwrap(),
            Some(Command::Method(PaymentMethod::Maya))
        );
    }

    #[test]
    fn test_parse_pay_splits_fields() {
        let parsed = Command::parse("pay Juan dela Cruz; 09171234567; juan@example.com").unwrap();
        assert_eq!(
            parsed,
            Some(Command::Pay(PaymentForm::new(
                "Juan dela Cruz",
                "09171234567",
                "juan@example.com"
            )))
        );
    }

    #[test]
    fn test_parse_pay_with_missing_fields_keeps_them_empty() {
        let parsed = Command::parse("pay Juan; 09171234567").unwrap();
        assert_eq!(
            parsed,
            Some(Command::Pay(PaymentForm::new("Juan", "09171234567", "")))
        );
    }

    #[test]
    fn test_unknown_command_is_an_error() {
        assert!(matches!(
            Command::parse("frobnicate"),
            Err(CalcError::UnknownCommand(_))
        ));
        assert!(matches!(
            Command::parse("plan mega"),
            Err(CalcError::UnknownCommand(_))
        ));
        // A minus sign glued to digits is not an entry.
        assert!(matches!(
            Command::parse("-12"),
            Err(CalcError::UnknownCommand(_))
        ));
    }
}
