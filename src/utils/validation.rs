use std::fmt;

use log::{debug, warn};

use crate::operator::constants::DISPLAY_LIMIT;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the set is empty or holds the same operator twice.
pub fn validate_operator_set<T: PartialEq + fmt::Display>(
    operators: &[T],
) -> Result<(), UtilsError> {
    debug!("Validating operator set of {} operators", operators.len());

    if operators.is_empty() {
        warn!("Operator set is empty");
        return Err(UtilsError::EmptyOperatorSet);
    }

    for (idx, op) in operators.iter().enumerate() {
        if operators.iter().skip(idx + 1).any(|other| other == op) {
            warn!("Operator {} appears more than once", op);
            return Err(UtilsError::DuplicateOperator(op.to_string()));
        }
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the value cannot be shown on the calculator display.
pub fn validate_display_value(value: i64) -> Result<(), UtilsError> {
    if value.unsigned_abs() > DISPLAY_LIMIT.unsigned_abs() {
        warn!("Value {} does not fit the display", value);
        return Err(UtilsError::OutOfDisplayRange {
            value,
            limit: DISPLAY_LIMIT,
        });
    }
    Ok(())
}
