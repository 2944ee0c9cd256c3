use crate::{
    calc_error::CalcError, calculator_output::CalculatorOutput, expression::ParsedExpression,
    numeral_system::NumeralSystem, operators::Operator,
};

/// Evaluates a line of input such as `V + III` or `10 / 3`, returning the
/// result written in the same numeral system as the operands.
#[derive(Default, Debug)]
pub struct Calculator {
    output: Vec<CalculatorOutput>,
    pub enable_tracing: bool,
}

impl Calculator {
    pub fn take_output(&mut self) -> Vec<CalculatorOutput> {
        std::mem::take(&mut self.output)
    }

    fn trace(&mut self, output: CalculatorOutput) {
        if self.enable_tracing {
            self.output.push(output);
        }
    }

    fn convert_operand(&mut self, token: &str, system: NumeralSystem) -> Result<i64, CalcError> {
        let value = system.parse(token)?;
        self.trace(CalculatorOutput::Converted {
            token: token.to_string(),
            system,
            value,
        });
        Ok(value)
    }

    pub fn evaluate(&mut self, expr: &ParsedExpression) -> Result<String, CalcError> {
        let system = match (
            NumeralSystem::classify(&expr.left),
            NumeralSystem::classify(&expr.right),
        ) {
            (Some(left), Some(right)) if left == right => left,
            _ => return Err(CalcError::MixedNumeralSystems),
        };
        let left = self.convert_operand(&expr.left, system)?;
        let right = self.convert_operand(&expr.right, system)?;

        let Some(operator) = Operator::from_char(expr.operator) else {
            return Err(CalcError::UnknownOperator);
        };
        let value = operator.evaluate(left, right)?;
        self.trace(CalculatorOutput::Computed {
            left,
            operator,
            right,
            value,
        });

        system.render(value)
    }

    pub fn evaluate_line<T: AsRef<str>>(&mut self, line: T) -> Result<String, CalcError> {
        let expr = ParsedExpression::parse(line)?;
        self.trace(CalculatorOutput::Parsed(expr.clone()));
        self.evaluate(&expr)
    }
}

/// Evaluates an already-parsed expression without tracing.
pub fn evaluate(expr: &ParsedExpression) -> Result<String, CalcError> {
    Calculator::default().evaluate(expr)
}

/// Parses and evaluates a line of input without tracing.
pub fn evaluate_line<T: AsRef<str>>(line: T) -> Result<String, CalcError> {
    Calculator::default().evaluate_line(line)
}
