use std::io::{stdin, IsTerminal, Stderr, Stdout, Write};

use romcalc_core::Calculator;
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{cli_args::CliArgs, stdio_printer::StdioPrinter};

const PROMPT: &'static str = "Enter an expression (e.g. 5 + 3 or V + II): ";

/// Somewhere to read lines of input from.
pub trait LineSource {
    /// Whether `read_line` shows the prompt itself.
    fn shows_prompt(&self) -> bool;

    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError>;

    fn add_history_entry(&mut self, line: &str) -> Result<(), ReadlineError>;
}

impl LineSource for DefaultEditor {
    // rustyline only draws the prompt when stdin is a terminal.
    fn shows_prompt(&self) -> bool {
        stdin().is_terminal()
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.readline(prompt)
    }

    fn add_history_entry(&mut self, line: &str) -> Result<(), ReadlineError> {
        DefaultEditor::add_history_entry(self, line).map(|_| ())
    }
}

pub struct StdioCalculator<W: Write = Stdout, E: Write = Stderr> {
    args: CliArgs,
    printer: StdioPrinter<W, E>,
    calculator: Calculator,
}

impl StdioCalculator {
    pub fn new(args: CliArgs) -> Self {
        StdioCalculator::with_printer(args, StdioPrinter::new())
    }

    pub fn run(&mut self) -> i32 {
        if !self.args.is_interactive() {
            return self.run_with(&mut NoInput);
        }

        let Ok(mut rl) = DefaultEditor::new() else {
            eprintln!("Initializing DefaultEditor failed!");
            return 1;
        };
        self.run_with(&mut rl)
    }
}

impl<W: Write, E: Write> StdioCalculator<W, E> {
    pub fn with_printer(args: CliArgs, printer: StdioPrinter<W, E>) -> Self {
        let calculator = args.create_calculator();
        StdioCalculator {
            args,
            printer,
            calculator,
        }
    }

    /// Evaluates a single line and reports the outcome. Evaluation errors
    /// are just shown to the user; they never affect the exit code.
    fn evaluate(&mut self, line: &str) -> std::io::Result<()> {
        let result = self.calculator.evaluate_line(line);

        // Show the trace first, even if evaluation failed partway through.
        for output in self.calculator.take_output() {
            self.printer.print_trace(&output)?;
        }

        match result {
            Ok(value) => self.printer.print_result(value),
            Err(err) => self.printer.print_error(&err),
        }
    }

    pub fn run_with<S: LineSource>(&mut self, source: &mut S) -> i32 {
        match self.run_impl(source) {
            Ok(_) => 0,
            Err(exit_code) => exit_code,
        }
    }

    fn run_impl<S: LineSource>(&mut self, source: &mut S) -> Result<(), i32> {
        if let Some(expression) = self.args.expression.clone() {
            self.evaluate(&expression).map_err(report_io_error)?;
        }

        if !self.args.is_interactive() {
            return Ok(());
        }

        loop {
            if !source.shows_prompt() {
                self.printer.print_prompt(PROMPT).map_err(report_io_error)?;
            }
            let line = match source.read_line(PROMPT) {
                Ok(line) => {
                    if self.args.repeat {
                        if let Err(err) = source.add_history_entry(line.as_str()) {
                            eprintln!("WARNING: Failed to add history entry ({:?}).", err);
                        }
                    }
                    line
                }
                Err(ReadlineError::Interrupted) => return Ok(()),
                Err(ReadlineError::Eof) => {
                    if self.args.repeat {
                        return Ok(());
                    }
                    // Without --repeat an empty read is still the one
                    // evaluation, so it gets reported like any bad input.
                    String::new()
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    return Err(1);
                }
            };
            self.evaluate(&line).map_err(report_io_error)?;

            if !self.args.repeat {
                return Ok(());
            }
        }
    }
}

fn report_io_error(err: std::io::Error) -> i32 {
    eprintln!("Error writing output: {}", err);
    1
}

/// Used when the expression comes from the command line and nothing
/// should be read.
struct NoInput;

impl LineSource for NoInput {
    fn shows_prompt(&self) -> bool {
        true
    }

    fn read_line(&mut self, _prompt: &str) -> Result<String, ReadlineError> {
        Err(ReadlineError::Eof)
    }

    fn add_history_entry(&mut self, _line: &str) -> Result<(), ReadlineError> {
        Ok(())
    }
}
