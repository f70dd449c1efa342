use log::trace;

use crate::operator::ast::Operator;
use crate::operator::constants::DISPLAY_LIMIT;
use crate::operator::errors::OperatorError;
use crate::utils::{self, UtilsError};

/// What the calculator shows after a key press that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The display now shows a different, in-range value.
    Changed(i64),
    /// The key left the display as it was.
    NoOperation,
    /// The result would not fit on the display.
    OutOfBounds,
}

impl Outcome {
    /// The new display value, if the key press changed it
    pub fn value(&self) -> Option<i64> {
        match self {
            Outcome::Changed(value) => Some(*value),
            Outcome::NoOperation | Outcome::OutOfBounds => None,
        }
    }
}

/// Why a transform produced no number at all
enum Fault {
    /// The exact result is larger than an `i64`, so certainly off the display.
    Overflow,
    Failed,
}

impl From<UtilsError> for Fault {
    fn from(err: UtilsError) -> Self {
        match err {
            UtilsError::NumberOverflow(_) => Fault::Overflow,
            _ => Fault::Failed,
        }
    }
}

impl Operator {
    fn transform(&self, number: i64) -> Result<i64, Fault> {
        match *self {
            Operator::Multiply(factor) => number.checked_mul(factor).ok_or(Fault::Overflow),
            Operator::Add(addend) => number.checked_add(addend).ok_or(Fault::Overflow),
            Operator::Divide(divisor) => {
                if divisor == 0 {
                    return Err(Fault::Failed);
                }
                match number.checked_rem(divisor) {
                    Some(0) => number.checked_div(divisor).ok_or(Fault::Overflow),
                    // Fractions cannot be displayed: the key does nothing.
                    Some(_) => Ok(number),
                    None => Err(Fault::Overflow),
                }
            }
            Operator::DigitReplace { from, to } => Ok(utils::replace_digits(number, from, to)?),
            Operator::DigitSum => Ok(utils::digit_sum(number)?),
            Operator::DigitAppend(digits) => Ok(utils::append_digits(number, digits)?),
            Operator::MirrorAppend => Ok(utils::mirror_append(number)?),
            Operator::Backspace => Ok(number / 10),
            Operator::ShiftLeft => Ok(utils::shift_left(number)?),
            Operator::ShiftRight => Ok(utils::shift_right(number)?),
        }
    }

    /// Press this key with `input` on the display.
    ///
    /// A successful press always changes the value and keeps it within
    /// [`DISPLAY_LIMIT`]; anything else is reported as an [`Outcome`].
    ///
    /// # Errors
    ///
    /// Returns [`OperatorError::OperationFailed`] when the transform cannot
    /// produce a number for this input, e.g. dividing by zero or summing the
    /// digits of a negative value.
    pub fn apply(&self, input: i64) -> Result<Outcome, OperatorError> {
        let result = match self.transform(input) {
            Ok(value) => value,
            Err(Fault::Overflow) => {
                trace!("{} overflowed on {}", self, input);
                return Ok(Outcome::OutOfBounds);
            }
            Err(Fault::Failed) => {
                trace!("{} failed on {}", self, input);
                return Err(OperatorError::OperationFailed {
                    operator: *self,
                    input,
                });
            }
        };

        if result == input {
            Ok(Outcome::NoOperation)
        } else if result.unsigned_abs() > DISPLAY_LIMIT.unsigned_abs() {
            Ok(Outcome::OutOfBounds)
        } else {
            Ok(Outcome::Changed(result))
        }
    }
}
