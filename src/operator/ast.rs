/// A calculator key: a pure, parameterised transformation of the displayed number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Multiply(i64),
    Add(i64),
    /// Exact division only; an inexact quotient leaves the value unchanged.
    Divide(i64),
    DigitReplace { from: u32, to: u32 },
    DigitSum,
    DigitAppend(u32),
    MirrorAppend,
    Backspace,
    ShiftLeft,
    ShiftRight,
}
