mod calc_error;
mod calculator;
mod calculator_output;
mod expression;
mod numeral_system;
mod numeral_table;
mod operators;
mod roman;

pub use calc_error::CalcError;
pub use calculator::{evaluate, evaluate_line, Calculator};
pub use calculator_output::CalculatorOutput;
pub use expression::ParsedExpression;
pub use numeral_system::{is_arabic, is_roman, NumeralSystem};
pub use numeral_table::{NumeralEntry, ROMAN_NUMERALS};
pub use operators::Operator;
pub use roman::{arabic_to_roman, roman_to_arabic, INVALID_FOR_ROMAN};
