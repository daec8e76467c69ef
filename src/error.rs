use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Payment submission failures. The `#[error]` text is exactly what the
/// presentation layer shows the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Please select a payment method (GCash or Maya)")]
    MethodRequired,
    #[error("Please fill in all required information")]
    MissingFields,
    #[error("Please enter a valid Philippine mobile number (09XX XXX XXXX)")]
    InvalidMobileNumber,
    #[error("Please select a plan before paying")]
    PlanRequired,
}
