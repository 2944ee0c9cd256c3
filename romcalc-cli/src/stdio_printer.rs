use std::{
    fmt::Display,
    io::{Stderr, Stdout, Write},
};

use colored::*;
use romcalc_core::{CalcError, CalculatorOutput};

/// Formats everything the shell shows the user.
///
/// The prompt, results and errors go to `out`, since they're the program's
/// actual output. Trace lines go to `err` so they can be redirected
/// separately.
pub struct StdioPrinter<W: Write = Stdout, E: Write = Stderr> {
    pub(crate) out: W,
    pub(crate) err: E,
}

impl StdioPrinter {
    pub fn new() -> Self {
        StdioPrinter::with_writers(std::io::stdout(), std::io::stderr())
    }
}

impl<W: Write, E: Write> StdioPrinter<W, E> {
    pub fn with_writers(out: W, err: E) -> Self {
        StdioPrinter { out, err }
    }

    pub fn format_result<T: Display>(value: T) -> String {
        format!("Result: {}", value)
    }

    pub fn format_error(err: &CalcError) -> String {
        format!("Error: {}", err)
    }

    /// Writes the prompt without a trailing newline.
    pub fn print_prompt(&mut self, prompt: &str) -> std::io::Result<()> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()
    }

    pub fn print_result<T: Display>(&mut self, value: T) -> std::io::Result<()> {
        writeln!(self.out, "{}", Self::format_result(value))
    }

    pub fn print_error(&mut self, err: &CalcError) -> std::io::Result<()> {
        writeln!(self.out, "{}", Self::format_error(err).red())
    }

    pub fn print_trace(&mut self, output: &CalculatorOutput) -> std::io::Result<()> {
        writeln!(self.err, "{}", format!("# {}", output).blue())
    }
}
