use std::fmt::Display;

use crate::{expression::ParsedExpression, numeral_system::NumeralSystem, operators::Operator};

/// Trace events recorded by a `Calculator` with tracing enabled.
#[derive(Debug, PartialEq)]
pub enum CalculatorOutput {
    Parsed(ParsedExpression),
    Converted {
        token: String,
        system: NumeralSystem,
        value: i64,
    },
    Computed {
        left: i64,
        operator: Operator,
        right: i64,
        value: i64,
    },
}

impl Display for CalculatorOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculatorOutput::Parsed(expr) => write!(f, "parsed: {}", expr),
            CalculatorOutput::Converted {
                token,
                system,
                value,
            } => write!(f, "{} operand: {} = {}", system, token, value),
            CalculatorOutput::Computed {
                left,
                operator,
                right,
                value,
            } => write!(f, "computed: {} {} {} = {}", left, operator, right, value),
        }
    }
}
