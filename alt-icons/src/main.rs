// This Clippy lint is disabled because this is a CLI binary, not a library:
// - print_stderr: CLI tools are expected to print errors to stderr for the user.
#![allow(clippy::print_stderr)]

mod cli;
mod logging;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
