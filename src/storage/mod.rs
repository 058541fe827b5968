//! Storage layer for the persistent journal list maps.
//!
//! This module provides the store that the generator writes and application code
//! reads later: a `FullToAbbreviation` map and a `ViewCounts` map inside a single
//! compressed file.
//!
//! # Modules
//!
//! - `backend`: Store trait abstraction for backend implementations
//! - `mv`: Compressed single-file implementation
//! - `models`: On-disk container format and map names

pub mod backend;
pub mod models;
pub mod mv;

pub use backend::JournalStore;
pub use models::{StoreData, FORMAT_VERSION, FULL_TO_ABBREVIATION, VIEW_COUNTS};
pub use mv::MvStore;
