use thiserror::Error;

/// Reasons a raw step string is rejected.
///
/// None of these ever reach the user: `Counter::set_step` recovers every
/// variant by falling back to the default step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("step input is empty")]
    Empty,
    #[error("step input is not a number: {0:?}")]
    NotANumber(String),
    #[error("step must be at least 1, got {0}")]
    BelowMinimum(i64),
    #[error("step input is out of range: {0:?}")]
    OutOfRange(String),
}

pub type StepResult<T> = Result<T, StepError>;
