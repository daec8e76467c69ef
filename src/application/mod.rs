//! Application layer: the `CalculatorSession` that owns all session state
//! and orchestrates the calculator, the tier policy, and the upgrade flow.

pub mod session;
