mod cli_args;
mod stdio_calculator;
mod stdio_printer;

use clap::Parser;
use cli_args::CliArgs;
use stdio_calculator::StdioCalculator;

fn main() {
    let args = CliArgs::parse();
    let mut calculator = StdioCalculator::new(args);
    let exit_code = calculator.run();
    std::process::exit(exit_code);
}
