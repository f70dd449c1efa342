//! Decimal-digit helpers and input validation

mod digits;
mod errors;
mod validation;

pub use digits::{
    append_digits, digit_sum, mirror_append, parse_decimal, replace_digits, shift_left,
    shift_right,
};
pub use errors::UtilsError;
pub use validation::{validate_display_value, validate_operator_set};
