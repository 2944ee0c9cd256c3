use clap::Parser;
use romcalc_core::Calculator;

/// Evaluates `<operand> <op> <operand>` with Arabic or Roman numerals.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Expression to evaluate instead of prompting for one (e.g. "V + II").
    pub expression: Option<String>,

    /// Keep prompting for expressions until EOF or CTRL-C.
    #[arg(short, long)]
    pub repeat: bool,

    /// Print each evaluation step to stderr.
    #[arg(short, long)]
    pub tracing: bool,
}

impl CliArgs {
    pub fn is_interactive(&self) -> bool {
        self.expression.is_none() || self.repeat
    }

    pub fn create_calculator(&self) -> Calculator {
        let mut calculator = Calculator::default();
        calculator.enable_tracing = self.tracing;
        calculator
    }
}
