//! `sha3sum-lines`: hash every line of a file with SHA-3.

use clap::{CommandFactory, Parser};
use keccak_sponge::cli::{self, Args};
use std::process::ExitCode;

fn main() -> ExitCode {
    // no arguments at all: print usage, like --help
    if std::env::args_os().len() <= 1 {
        return match Args::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    let args = Args::parse();
    match cli::run(&args) {
        Ok(lines) => {
            log::debug!("hashed {lines} lines");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("sha3sum-lines: {e}");
            ExitCode::FAILURE
        }
    }
}
