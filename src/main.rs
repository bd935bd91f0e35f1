//! userbase CLI entry point
//!
//! Parses arguments, dispatches to the selected command, prints any
//! error to stderr and exits non-zero. All logic lives in `cli`.

use userbase::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
