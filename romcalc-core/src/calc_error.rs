use std::{error::Error, fmt::Display};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CalcError {
    /// The input doesn't contain anything of the form `<operand><op><operand>`.
    Format,
    /// A Roman-looking token didn't add up to anything.
    InvalidNumeral,
    /// One operand is Roman and the other is Arabic.
    MixedNumeralSystems,
    DivisionByZero,
    UnknownOperator,
    /// Roman numerals can't represent zero or negative results.
    OutOfRange,
    /// An operand or result doesn't fit in an `i64`.
    Overflow,
}

impl Error for CalcError {}

impl Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::Format => write!(f, "invalid input format"),
            CalcError::InvalidNumeral => write!(f, "invalid Roman numeral"),
            CalcError::MixedNumeralSystems => write!(f, "different numeral systems"),
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::UnknownOperator => write!(f, "unknown operation"),
            CalcError::OutOfRange => write!(f, "result out of range for Roman numerals"),
            CalcError::Overflow => write!(f, "number too large"),
        }
    }
}
