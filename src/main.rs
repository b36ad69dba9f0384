//! Binary entrypoint for the `plank` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match plank::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
