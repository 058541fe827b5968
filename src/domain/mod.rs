//! Domain layer for the journal list generator.
//!
//! This module contains the core domain types, independent of how abbreviation
//! lists are parsed or how the maps are persisted.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`abbreviation`]: Journal abbreviation record
//!
//! # Examples
//!
//! ```
//! use journal_list::domain::{Abbreviation, Result};
//!
//! fn create_record() -> Result<Abbreviation> {
//!     Ok(Abbreviation::new("Journal of Foo", "J. Foo", ""))
//! }
//! # assert!(create_record().is_ok());
//! ```

pub mod abbreviation;
pub mod error;

pub use abbreviation::Abbreviation;
pub use error::{JournalListError, Result};
