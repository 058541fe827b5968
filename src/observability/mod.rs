//! Logging setup.
//!
//! Diagnostics are emitted with `tracing` and written to stderr. Stdout is left to
//! the generator's progress lines, which build scripts may read.
//!
//! # Configuration
//!
//! The log filter is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. [`Config::trace_level`](crate::Config::trace_level)
//! 3. Default: `"warn"`
//!
//! # Usage
//!
//! ```rust
//! use journal_list::observability::init_tracing;
//! use journal_list::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("generator starting");
//! ```

mod init;

pub use init::init_tracing;
