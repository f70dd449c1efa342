use std::fmt;

use crate::operator::ast::Operator;

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operator::Multiply(factor) => write!(f, "Multiply({})", factor),
            Operator::Add(addend) => write!(f, "Add({})", addend),
            Operator::Divide(divisor) => write!(f, "Divide({})", divisor),
            Operator::DigitReplace { from, to } => write!(f, "Replace({}=>{})", from, to),
            Operator::DigitSum => write!(f, "Sum"),
            Operator::DigitAppend(digits) => write!(f, "Append({})", digits),
            Operator::MirrorAppend => write!(f, "Mirror"),
            Operator::Backspace => write!(f, "Backspace"),
            Operator::ShiftLeft => write!(f, "ShiftLeft"),
            Operator::ShiftRight => write!(f, "ShiftRight"),
        }
    }
}
