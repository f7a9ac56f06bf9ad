//! # Invtrack CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns an error into exit status 1. See the
//! library docs for the layering below the CLI.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
