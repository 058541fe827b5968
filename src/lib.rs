//! Journal list: build-time generator for the journal abbreviation store.
//!
//! The generator reads a directory of CSV lists mapping full journal names to
//! their abbreviations and merges them into a single compressed store file:
//! - `FullToAbbreviation`: full journal name → [`Abbreviation`]
//! - `ViewCounts`: citation key → number of views
//!
//! Application code opens the store later through [`storage::MvStore`].

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← Entry point, exit codes
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Generator (generator/)                             │  ← Scan, ignore, merge
//! │  - View count API                                   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Parser        │   │ Storage Layer │   │ Infrastructure│
//! │ (parser/)     │   │ (storage/)    │   │ (infra../)    │
//! │ - CSV lists   │   │ - Two maps    │   │ - Fixed paths │
//! │ - Delimiters  │   │ - gzip + JSON │   │ - Dir scan    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Abbreviation, errors             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use journal_list::{run, Config};
//!
//! let config = Config::from_args(std::env::args_os().skip(1));
//! run(&config)?;
//! # Ok::<(), journal_list::JournalListError>(())
//! ```

pub mod domain;
pub mod generator;
pub mod infrastructure;
pub mod parser;
pub mod storage;

pub mod observability;

pub use domain::{Abbreviation, JournalListError, Result};
pub use generator::{GenerateOutcome, GenerateReport, Generator};

use std::ffi::OsStr;
use std::path::PathBuf;

/// Command line flag that enables the view count demonstration.
pub const VERBOSE_FLAG: &str = "--verbose";

/// Citation key used by the view count demonstration.
pub const EXAMPLE_CITATION_KEY: &str = "exampleCitationKey";

/// Generator configuration.
///
/// The binary always uses the fixed relative paths from
/// [`infrastructure::paths`]; only `verbose` comes from the command line. Library
/// callers can point the paths elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory containing the abbreviation CSV lists.
    pub source_dir: PathBuf,

    /// Location of the generated store file.
    pub store_path: PathBuf,

    /// Run the view count demonstration after generating.
    pub verbose: bool,

    /// Log filter used when `RUST_LOG` is not set.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"warn"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: infrastructure::abbreviations_dir(),
            store_path: infrastructure::journal_list_store_file(),
            verbose: false,
            trace_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Builds a configuration from command line arguments, program name excluded.
    ///
    /// Verbose mode is enabled only when the sole argument is `--verbose`. Any
    /// other combination, including arguments that are not valid Unicode, is
    /// accepted silently and runs non-verbose.
    ///
    /// # Example
    ///
    /// ```rust
    /// use journal_list::Config;
    ///
    /// assert!(Config::from_args(["--verbose"]).verbose);
    /// assert!(!Config::from_args(["--verbose", "extra"]).verbose);
    /// assert!(!Config::from_args(Vec::<String>::new()).verbose);
    /// ```
    #[must_use]
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let verbose =
            matches!(args.as_slice(), [only] if only.as_ref() == OsStr::new(VERBOSE_FLAG));

        Self {
            verbose,
            ..Self::default()
        }
    }
}

/// Runs the generator end to end: open, generate, optional demo, close.
///
/// A missing source directory is not an error: the notice is printed and the
/// store is closed untouched.
///
/// # Errors
///
/// Returns the first error from opening the store, processing a list, or the
/// final flush.
pub fn run(config: &Config) -> Result<GenerateOutcome> {
    let mut generator = Generator::open(config)?;
    let outcome = generator.generate()?;

    if matches!(outcome, GenerateOutcome::SourceMissing(_)) {
        generator.close()?;
        return Ok(outcome);
    }

    if config.verbose {
        generator.update_view_count(EXAMPLE_CITATION_KEY);
        let count = generator.view_count(EXAMPLE_CITATION_KEY);
        println!("View count for {EXAMPLE_CITATION_KEY}: {count}");
    }

    generator.close()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_fixed_paths() {
        let config = Config::default();
        assert_eq!(config.source_dir, infrastructure::abbreviations_dir());
        assert_eq!(config.store_path, infrastructure::journal_list_store_file());
        assert!(!config.verbose);
    }

    #[test]
    fn unknown_arguments_are_non_verbose() {
        assert!(!Config::from_args(["-v"]).verbose);
        assert!(!Config::from_args(["--VERBOSE"]).verbose);
        assert!(!Config::from_args(["--verbose", "--verbose"]).verbose);
        assert!(Config::from_args([String::from("--verbose")]).verbose);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_argument_is_non_verbose() {
        use std::os::unix::ffi::OsStrExt;

        assert!(!Config::from_args([OsStr::from_bytes(&[0x66, 0xff])]).verbose);
    }
}
