//! Infrastructure layer for filesystem interactions.
//!
//! This module provides the fixed input and output locations and the directory
//! scan that finds abbreviation lists.

pub mod paths;
pub mod scan;

pub use paths::{abbreviations_dir, is_ignored, journal_list_store_file, IGNORED_FILE_NAMES};
pub use scan::list_csv_files;
