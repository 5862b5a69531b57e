use thiserror::Error;

/// Failure to obtain a usable timestamp. The engine never substitutes a
/// default time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("invalid clock input: {reason}")]
    InvalidInput { reason: String },
}

impl ClockError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ClockError::InvalidInput { reason: reason.into() }
    }
}
