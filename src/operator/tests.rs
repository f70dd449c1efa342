use crate::operator::constants::DISPLAY_LIMIT;
use crate::operator::{Operator, OperatorError, Outcome};

fn all_operators() -> Vec<Operator> {
    vec![
        Operator::Multiply(3),
        Operator::Multiply(-2),
        Operator::Add(7),
        Operator::Add(-4),
        Operator::Divide(2),
        Operator::Divide(3),
        Operator::DigitReplace { from: 1, to: 9 },
        Operator::DigitSum,
        Operator::DigitAppend(5),
        Operator::MirrorAppend,
        Operator::Backspace,
        Operator::ShiftLeft,
        Operator::ShiftRight,
    ]
}

#[test]
fn test_apply_basic_arithmetic() {
    assert_eq!(Operator::Multiply(4).apply(3), Ok(Outcome::Changed(12)));
    assert_eq!(Operator::Add(4).apply(3), Ok(Outcome::Changed(7)));
    assert_eq!(Operator::Add(-10).apply(3), Ok(Outcome::Changed(-7)));
    assert_eq!(Operator::Divide(4).apply(16), Ok(Outcome::Changed(4)));
    assert_eq!(Operator::Divide(4).apply(-8), Ok(Outcome::Changed(-2)));
}

#[test]
fn test_apply_digit_operators() {
    assert_eq!(Operator::DigitSum.apply(22), Ok(Outcome::Changed(4)));
    assert_eq!(Operator::MirrorAppend.apply(22), Ok(Outcome::Changed(2222)));
    assert_eq!(Operator::DigitAppend(1).apply(12), Ok(Outcome::Changed(121)));
    assert_eq!(
        Operator::DigitReplace { from: 2, to: 5 }.apply(212),
        Ok(Outcome::Changed(515))
    );
    assert_eq!(Operator::Backspace.apply(123), Ok(Outcome::Changed(12)));
    assert_eq!(Operator::ShiftLeft.apply(123), Ok(Outcome::Changed(231)));
    assert_eq!(Operator::ShiftRight.apply(123), Ok(Outcome::Changed(312)));
    assert_eq!(Operator::ShiftRight.apply(5), Ok(Outcome::Changed(50)));
}

#[test]
fn test_backspace_truncates_toward_zero() {
    assert_eq!(Operator::Backspace.apply(-15), Ok(Outcome::Changed(-1)));
    assert_eq!(Operator::Backspace.apply(-5), Ok(Outcome::Changed(0)));
    assert_eq!(Operator::Backspace.apply(9), Ok(Outcome::Changed(0)));
    assert_eq!(Operator::Backspace.apply(0), Ok(Outcome::NoOperation));
}

#[test]
fn test_unchanged_value_is_no_operation() {
    assert_eq!(Operator::Add(0).apply(5), Ok(Outcome::NoOperation));
    assert_eq!(Operator::Multiply(1).apply(42), Ok(Outcome::NoOperation));
    assert_eq!(Operator::ShiftLeft.apply(7), Ok(Outcome::NoOperation));
    assert_eq!(Operator::DigitSum.apply(7), Ok(Outcome::NoOperation));
    assert_eq!(
        Operator::DigitReplace { from: 1, to: 2 }.apply(55),
        Ok(Outcome::NoOperation)
    );
}

#[test]
fn test_inexact_division_is_no_operation() {
    assert_eq!(Operator::Divide(2).apply(3), Ok(Outcome::NoOperation));
    assert_eq!(Operator::Divide(4).apply(-6), Ok(Outcome::NoOperation));
    assert_eq!(Operator::Divide(3).apply(10), Ok(Outcome::NoOperation));
}

#[test]
fn test_display_limit_boundary() {
    assert_eq!(
        Operator::Add(1).apply(999_998),
        Ok(Outcome::Changed(999_999))
    );
    assert_eq!(Operator::Add(1).apply(999_999), Ok(Outcome::OutOfBounds));
    assert_eq!(
        Operator::Multiply(10).apply(100_000),
        Ok(Outcome::OutOfBounds)
    );
    assert_eq!(
        Operator::Add(-1).apply(-999_998),
        Ok(Outcome::Changed(-999_999))
    );
    assert_eq!(Operator::Add(-1).apply(-999_999), Ok(Outcome::OutOfBounds));
    assert_eq!(Operator::MirrorAppend.apply(1000), Ok(Outcome::OutOfBounds));
}

#[test]
fn test_overflow_is_out_of_bounds() {
    assert_eq!(
        Operator::Multiply(i64::MAX).apply(999_999),
        Ok(Outcome::OutOfBounds)
    );
    assert_eq!(Operator::Add(i64::MAX).apply(5), Ok(Outcome::OutOfBounds));
    assert_eq!(
        Operator::DigitAppend(u32::MAX).apply(999_999_999),
        Ok(Outcome::OutOfBounds)
    );
}

#[test]
fn test_faults_are_operation_failed() {
    assert_eq!(
        Operator::Divide(0).apply(10),
        Err(OperatorError::OperationFailed {
            operator: Operator::Divide(0),
            input: 10,
        })
    );
    assert!(matches!(
        Operator::DigitSum.apply(-12),
        Err(OperatorError::OperationFailed { input: -12, .. })
    ));
    assert!(Operator::MirrorAppend.apply(-3).is_err());
    assert!(Operator::ShiftLeft.apply(-12).is_err());
    assert!(Operator::ShiftRight.apply(-12).is_err());
}

#[test]
fn test_apply_envelope_holds_for_every_operator() {
    for op in all_operators() {
        for input in -1_200..=1_200 {
            match op.apply(input) {
                Ok(Outcome::Changed(value)) => {
                    assert_ne!(value, input, "{} on {}", op, input);
                    assert!(value.abs() <= DISPLAY_LIMIT, "{} on {}", op, input);
                }
                Ok(Outcome::NoOperation) | Ok(Outcome::OutOfBounds) => {}
                Err(err) => {
                    assert_eq!(err, OperatorError::OperationFailed { operator: op, input });
                }
            }
        }
    }
}

#[test]
fn test_apply_is_pure() {
    for op in all_operators() {
        for input in [0, 1, 7, 22, 105, 999_999] {
            assert_eq!(op.apply(input), op.apply(input));
        }
    }
}

#[test]
fn test_outcome_value() {
    assert_eq!(Outcome::Changed(3).value(), Some(3));
    assert_eq!(Outcome::NoOperation.value(), None);
    assert_eq!(Outcome::OutOfBounds.value(), None);
}

#[test]
fn test_display_names() {
    assert_eq!(Operator::Multiply(4).to_string(), "Multiply(4)");
    assert_eq!(Operator::Add(-3).to_string(), "Add(-3)");
    assert_eq!(Operator::Divide(2).to_string(), "Divide(2)");
    assert_eq!(
        Operator::DigitReplace { from: 1, to: 2 }.to_string(),
        "Replace(1=>2)"
    );
    assert_eq!(Operator::DigitSum.to_string(), "Sum");
    assert_eq!(Operator::DigitAppend(9).to_string(), "Append(9)");
    assert_eq!(Operator::MirrorAppend.to_string(), "Mirror");
    assert_eq!(Operator::Backspace.to_string(), "Backspace");
    assert_eq!(Operator::ShiftLeft.to_string(), "ShiftLeft");
    assert_eq!(Operator::ShiftRight.to_string(), "ShiftRight");
}

#[test]
fn test_parse_display_names() {
    for op in all_operators() {
        let parsed: Result<Operator, _> = op.to_string().parse();
        assert_eq!(parsed, Ok(op));
    }
}

#[test]
fn test_parse_shorthand_labels() {
    assert_eq!("x4".parse::<Operator>(), Ok(Operator::Multiply(4)));
    assert_eq!("*-2".parse::<Operator>(), Ok(Operator::Multiply(-2)));
    assert_eq!("+4".parse::<Operator>(), Ok(Operator::Add(4)));
    assert_eq!("-3".parse::<Operator>(), Ok(Operator::Add(-3)));
    assert_eq!("/2".parse::<Operator>(), Ok(Operator::Divide(2)));
    assert_eq!("1=>2".parse::<Operator>(), Ok(Operator::DigitReplace { from: 1, to: 2 }));
    assert_eq!("<<".parse::<Operator>(), Ok(Operator::Backspace));
    assert_eq!("shift<".parse::<Operator>(), Ok(Operator::ShiftLeft));
    assert_eq!("Shift>".parse::<Operator>(), Ok(Operator::ShiftRight));
    assert_eq!("SUM".parse::<Operator>(), Ok(Operator::DigitSum));
    assert_eq!("5".parse::<Operator>(), Ok(Operator::DigitAppend(5)));
    assert_eq!("append 12".parse::<Operator>(), Ok(Operator::DigitAppend(12)));
    assert_eq!(" divide( 3 ) ".parse::<Operator>(), Ok(Operator::Divide(3)));
}

#[test]
fn test_parse_rejects_garbage() {
    for text in ["", "pow(2)", "x", "/", "1=>", "add()", "reverse", "2.5"] {
        let parsed: Result<Operator, _> = text.parse();
        assert_eq!(parsed, Err(OperatorError::Parse(text.to_string())));
    }
}
