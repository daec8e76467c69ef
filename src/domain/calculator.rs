use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel shown in place of an operand after a failed evaluation.
pub const ERROR_DISPLAY: &str = "ERROR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Applies the operator. `None` signals division by zero; every other
    /// combination (including NaN operands) produces a value.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(lhs + rhs),
            Operator::Subtract => Some(lhs - rhs),
            Operator::Multiply => Some(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    None
                } else {
                    Some(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Outcome of computing the pending binary operation, before anything is
/// committed to the display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalOutcome {
    /// No operator or no left operand pending; evaluation is a no-op.
    Idle,
    /// Right operand was zero under division.
    DivideByZero,
    /// Computed result. The caller decides whether it may be committed.
    Value(f64),
}

/// The calculator state machine: the in-progress operand, the operand
/// captured when an operator was staged, and the pending operator.
///
/// Invariants: `current` is never empty and holds at most one decimal point
/// (or the error sentinel). `previous` is only ever a former `current`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculator {
    current: String,
    previous: Option<String>,
    operator: Option<Operator>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            operator: None,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn is_error(&self) -> bool {
        self.current == ERROR_DISPLAY
    }

    /// True when an operator and a left operand are both staged.
    pub fn has_pending(&self) -> bool {
        self.operator.is_some() && self.previous.is_some()
    }

    /// Feeds one typed token into the in-progress operand. Returns whether
    /// the operand changed (a second decimal point, or anything that is not
    /// a digit or point, is ignored).
    pub fn append(&mut self, token: char) -> bool {
        if token != '.' && !token.is_ascii_digit() {
            return false;
        }
        if self.current == "0" || self.is_error() {
            self.current = if token == '.' {
                "0.".to_string()
            } else {
                token.to_string()
            };
            return true;
        }
        if token == '.' && self.current.contains('.') {
            return false;
        }
        self.current.push(token);
        true
    }

    /// Stages an operator: the current operand becomes the left operand and
    /// entry restarts at `"0"`. Callers evaluate any pending pair first.
    pub fn stage_operator(&mut self, op: Operator) {
        self.operator = Some(op);
        self.previous = Some(std::mem::replace(&mut self.current, "0".to_string()));
    }

    /// Computes the pending operation without mutating any state.
    ///
    /// Operands parse the way `parseFloat` would: a non-numeric operand (a
    /// stale error sentinel staged as the left operand) becomes NaN rather
    /// than an error.
    pub fn compute(&self) -> EvalOutcome {
        let (Some(op), Some(prev)) = (self.operator, self.previous.as_deref()) else {
            return EvalOutcome::Idle;
        };
        let lhs = parse_operand(prev);
        let rhs = parse_operand(&self.current);
        match op.apply(lhs, rhs) {
            Some(value) => EvalOutcome::Value(value),
            None => EvalOutcome::DivideByZero,
        }
    }

    /// Commits a result: it becomes the displayed operand and the operator
    /// chain terminates.
    pub fn commit(&mut self, result: f64) {
        self.current = format_result(result);
        self.operator = None;
        self.previous = None;
    }

    /// Enters the error display state. The operator and left operand stay
    /// staged until `clear` or the next evaluation reuses them.
    pub fn mark_error(&mut self) {
        self.current = ERROR_DISPLAY.to_string();
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

fn parse_operand(operand: &str) -> f64 {
    operand.parse().unwrap_or(f64::NAN)
}

/// Shortest round-trip form: `10`, not `10.0`.
fn format_result(value: f64) -> String {
    value.to_string()
}
