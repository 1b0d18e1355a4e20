//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and hands its exit code to the process.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    ExitCode::from(cli::run())
}
