use romcalc_core::{
    evaluate, evaluate_line, CalcError, Calculator, CalculatorOutput, NumeralSystem, Operator,
    ParsedExpression,
};

fn assert_eval_output(line: &'static str, expected: &'static str) {
    match evaluate_line(line) {
        Ok(output) => assert_eq!(output, expected, "evaluating '{}'", line),
        Err(err) => panic!("expected '{}' to succeed but got '{}'", line, err),
    }
}

fn assert_eval_error(line: &'static str, expected: CalcError) {
    match evaluate_line(line) {
        Ok(output) => panic!("expected '{}' to error but it returned '{}'", line, output),
        Err(err) => assert_eq!(err, expected, "evaluating '{}'", line),
    }
}

#[test]
fn arabic_arithmetic_works() {
    assert_eval_output("5 + 3", "8");
    assert_eval_output("10 - 4", "6");
    assert_eval_output("6 * 7", "42");
    assert_eval_output("15 / 3", "5");
    assert_eval_output("7/2", "3");
}

#[test]
fn arabic_results_can_be_zero_or_negative() {
    assert_eval_output("3 - 3", "0");
    assert_eval_output("3 - 10", "-7");
    assert_eval_output("0 * 5", "0");
}

#[test]
fn arabic_operands_can_have_leading_zeros() {
    assert_eval_output("007 + 1", "8");
}

#[test]
fn roman_arithmetic_works() {
    assert_eval_output("V + III", "VIII");
    assert_eval_output("X - IV", "VI");
    assert_eval_output("XII * III", "XXXVI");
    assert_eval_output("X / III", "III");
    assert_eval_output("MCM + XCIX", "MCMXCIX");
}

#[test]
fn roman_results_past_3999_repeat_m() {
    assert_eval_output("MMM + M", "MMMM");
    assert_eval_output("MM * III", "MMMMMM");
}

#[test]
fn malformed_roman_operands_are_accepted_greedily() {
    assert_eval_output("IIII + I", "V");
    assert_eval_output("VV / II", "V");
}

#[test]
fn surrounding_text_is_ignored() {
    assert_eval_output("what is 12 * 4?", "48");
    assert_eval_output("calc: X+X", "XX");
}

#[test]
fn malformed_input_is_a_format_error() {
    assert_eval_error("abc", CalcError::Format);
    assert_eval_error("", CalcError::Format);
    assert_eval_error("5 ^ 3", CalcError::Format);
    assert_eval_error("-5", CalcError::Format);
}

#[test]
fn division_by_zero_errors() {
    assert_eval_error("10 / 0", CalcError::DivisionByZero);
    assert_eval_error("0 / 0", CalcError::DivisionByZero);
}

#[test]
fn mixing_numeral_systems_errors() {
    assert_eval_error("V + 3", CalcError::MixedNumeralSystems);
    assert_eval_error("3 + V", CalcError::MixedNumeralSystems);
}

#[test]
fn non_positive_roman_results_are_out_of_range() {
    assert_eval_error("I - V", CalcError::OutOfRange);
    assert_eval_error("V - V", CalcError::OutOfRange);
    assert_eval_error("I / X", CalcError::OutOfRange);
}

#[test]
fn oversized_numbers_overflow() {
    assert_eval_error("99999999999999999999 + 1", CalcError::Overflow);
    assert_eval_error("9223372036854775807 + 1", CalcError::Overflow);
    assert_eval_error("9223372036854775807 * 2", CalcError::Overflow);
    assert_eval_output("9223372036854775807 + 0", "9223372036854775807");
}

#[test]
fn unknown_operators_error() {
    let expr = ParsedExpression {
        left: "5".to_string(),
        operator: '%',
        right: "3".to_string(),
    };
    assert_eq!(evaluate(&expr), Err(CalcError::UnknownOperator));
}

#[test]
fn unclassifiable_operands_count_as_mixed_systems() {
    // The parser never produces these, but the evaluator still has to
    // cope with hand-built expressions.
    let expr = ParsedExpression {
        left: "V".to_string(),
        operator: '+',
        right: "".to_string(),
    };
    assert_eq!(evaluate(&expr), Err(CalcError::MixedNumeralSystems));
}

#[test]
fn errors_have_user_facing_messages() {
    let messages = [
        (CalcError::Format, "invalid input format"),
        (CalcError::InvalidNumeral, "invalid Roman numeral"),
        (CalcError::MixedNumeralSystems, "different numeral systems"),
        (CalcError::DivisionByZero, "division by zero"),
        (CalcError::UnknownOperator, "unknown operation"),
        (
            CalcError::OutOfRange,
            "result out of range for Roman numerals",
        ),
        (CalcError::Overflow, "number too large"),
    ];
    for (err, message) in messages {
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn tracing_is_disabled_by_default() {
    let mut calculator = Calculator::default();
    assert_eq!(calculator.evaluate_line("V + III"), Ok("VIII".to_string()));
    assert!(calculator.take_output().is_empty());
}

#[test]
fn tracing_records_each_step() {
    let mut calculator = Calculator::default();
    calculator.enable_tracing = true;
    assert_eq!(calculator.evaluate_line("X - IV"), Ok("VI".to_string()));
    let output = calculator.take_output();
    assert_eq!(
        output,
        vec![
            CalculatorOutput::Parsed(ParsedExpression {
                left: "X".to_string(),
                operator: '-',
                right: "IV".to_string(),
            }),
            CalculatorOutput::Converted {
                token: "X".to_string(),
                system: NumeralSystem::Roman,
                value: 10,
            },
            CalculatorOutput::Converted {
                token: "IV".to_string(),
                system: NumeralSystem::Roman,
                value: 4,
            },
            CalculatorOutput::Computed {
                left: 10,
                operator: Operator::Subtract,
                right: 4,
                value: 6,
            },
        ]
    );
    let lines = output.iter().map(|o| o.to_string()).collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "parsed: X - IV",
            "Roman operand: X = 10",
            "Roman operand: IV = 4",
            "computed: 10 - 4 = 6",
        ]
    );
    assert!(calculator.take_output().is_empty());
}

#[test]
fn tracing_keeps_steps_leading_up_to_an_error() {
    let mut calculator = Calculator::default();
    calculator.enable_tracing = true;
    assert_eq!(calculator.evaluate_line("I - V"), Err(CalcError::OutOfRange));
    let output = calculator.take_output();
    assert_eq!(output.len(), 4);
    assert_eq!(output[3].to_string(), "computed: 1 - 5 = -4");
}
