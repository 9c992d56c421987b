//! # Emptrack Binary
//!
//! Thin entry point. All work happens in [`cli::run`]; any error that escapes it is
//! printed to stderr and the process exits with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
