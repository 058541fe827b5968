//! Command line entry point for the journal list generator.
//!
//! Usage: `journal-list-generator [--verbose]`
//!
//! Reads `buildres/abbrv.jabref.org/journals/*.csv` relative to the working
//! directory and writes `build/resources/main/journals/journal-list.mv`.
//!
//! # Exit Codes
//!
//! - `0`: store generated, or source directory missing (nothing to do)
//! - `1`: an I/O, parse or storage error aborted the run

#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use journal_list::observability::init_tracing;
use journal_list::{run, Config};

fn main() -> ExitCode {
    let config = Config::from_args(std::env::args_os().skip(1));
    init_tracing(&config);

    match run(&config) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "generator finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "journal list generation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
