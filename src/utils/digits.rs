use std::num::IntErrorKind;

use log::trace;

use crate::utils::errors::UtilsError;

/// Parse a decimal string the way the calculator reads its display.
///
/// Leading zeros are accepted (`"012"` is 12). Digit strings too long for
/// `i64` report [`UtilsError::NumberOverflow`] so callers can tell an
/// oversized result apart from a malformed one.
///
/// # Errors
///
/// Returns an error if the text is not an optionally signed run of ASCII
/// digits, or if its value does not fit in an `i64`.
pub fn parse_decimal(text: &str) -> Result<i64, UtilsError> {
    text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            UtilsError::NumberOverflow(text.to_string())
        }
        _ => {
            trace!("Rejecting malformed decimal '{}'", text);
            UtilsError::MalformedNumber(text.to_string())
        }
    })
}

/// Sum of the decimal digits of `number`.
///
/// # Errors
///
/// A negative number has a sign character that is not a digit and is
/// rejected as malformed.
pub fn digit_sum(number: i64) -> Result<i64, UtilsError> {
    let text = number.to_string();
    text.chars().try_fold(0_i64, |acc, c| {
        c.to_digit(10)
            .map(|d| acc + i64::from(d))
            .ok_or_else(|| UtilsError::MalformedNumber(text.clone()))
    })
}

/// Replace every occurrence of `from` with `to` in the decimal form of `number`.
///
/// # Errors
///
/// Returns an error if the rewritten text no longer parses.
pub fn replace_digits(number: i64, from: u32, to: u32) -> Result<i64, UtilsError> {
    let text = number
        .to_string()
        .replace(&from.to_string(), &to.to_string());
    parse_decimal(&text)
}

/// Concatenate `digits` onto the decimal form of `number`.
///
/// # Errors
///
/// Returns an error if the result overflows.
pub fn append_digits(number: i64, digits: u32) -> Result<i64, UtilsError> {
    parse_decimal(&format!("{}{}", number, digits))
}

/// Concatenate the decimal form of `number` with its own reverse.
///
/// # Errors
///
/// Negative numbers end up with a trailing sign and are malformed.
pub fn mirror_append(number: i64) -> Result<i64, UtilsError> {
    let text = number.to_string();
    let reversed: String = text.chars().rev().collect();
    parse_decimal(&format!("{}{}", text, reversed))
}

/// Move the leading character of the decimal form to the end.
///
/// # Errors
///
/// For negative numbers the sign is the leading character, which makes the
/// result malformed.
pub fn shift_left(number: i64) -> Result<i64, UtilsError> {
    let text = number.to_string();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => parse_decimal(&format!("{}{}", chars.as_str(), first)),
        None => Err(UtilsError::MalformedNumber(text)),
    }
}

/// Move the trailing decimal digit to the front.
///
/// Uses floored division, so a single digit gains a trailing zero
/// (`5` becomes `50`) and `120` becomes `12`.
///
/// # Errors
///
/// Negative numbers place the sign in the middle of the text and are
/// malformed.
pub fn shift_right(number: i64) -> Result<i64, UtilsError> {
    let last = number.rem_euclid(10);
    let rest = number.div_euclid(10);
    parse_decimal(&format!("{}{}", last, rest))
}
