//! verbump CLI entry point

use clap::Parser;
use std::io::Write;
use std::process;
use verbump::cli::Cli;
use verbump::output::Printer;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = verbump::logging::init(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let mut printer = Printer::stdio(cli.format, cli.color);
    let exit_code = verbump::cli::dispatch::run(&cli, &mut printer);

    // process::exit skips destructors
    let (mut out, mut err) = printer.into_inner();
    let _ = out.flush();
    let _ = err.flush();

    process::exit(exit_code);
}
