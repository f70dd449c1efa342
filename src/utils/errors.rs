use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Not a decimal integer: '{0}'")]
    MalformedNumber(String),
    #[error("Decimal integer does not fit in 64 bits: '{0}'")]
    NumberOverflow(String),
    #[error("Operator set cannot be empty")]
    EmptyOperatorSet,
    #[error("Operator set contains a duplicate: {0}")]
    DuplicateOperator(String),
    #[error("Value {value} exceeds the calculator display (|n| <= {limit})")]
    OutOfDisplayRange { value: i64, limit: i64 },
}
