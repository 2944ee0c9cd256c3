use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;

use crate::calc_error::CalcError;

lazy_static! {
    /// An operand is either a run of digits or a run of Roman letters,
    /// and whitespace around the operator is optional.
    static ref EXPRESSION_REGEX: Regex =
        Regex::new(r"([0-9]+|[IVXLCDM]+)\s*([-+*/])\s*([0-9]+|[IVXLCDM]+)")
            .expect("expression regex should be valid");
}

#[derive(Debug, PartialEq, Clone)]
pub struct ParsedExpression {
    pub left: String,
    pub operator: char,
    pub right: String,
}

impl ParsedExpression {
    /// Finds the first `<operand><operator><operand>` in the given input.
    ///
    /// Anything before or after the match is ignored, so
    /// `"what is 5 + 3?"` parses the same as `"5+3"`.
    pub fn parse<T: AsRef<str>>(input: T) -> Result<Self, CalcError> {
        let Some(captures) = EXPRESSION_REGEX.captures(input.as_ref()) else {
            return Err(CalcError::Format);
        };
        let (Some(left), Some(operator), Some(right)) =
            (captures.get(1), captures.get(2), captures.get(3))
        else {
            return Err(CalcError::Format);
        };
        let Some(operator) = operator.as_str().chars().next() else {
            return Err(CalcError::Format);
        };

        Ok(ParsedExpression {
            left: left.as_str().to_string(),
            operator,
            right: right.as_str().to_string(),
        })
    }
}

impl FromStr for ParsedExpression {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParsedExpression::parse(s)
    }
}

impl Display for ParsedExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}
