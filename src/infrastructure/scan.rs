//! Source directory scanning.

use crate::domain::error::Result;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Lists the `.csv` files directly inside `dir`, sorted by file name.
///
/// The scan is not recursive. Directories and other non-regular entries are
/// skipped even when their name ends in `.csv`. The extension match is
/// case-sensitive.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension() == Some(OsStr::new("csv")) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(dir = ?dir, count = files.len(), "found csv files");
    Ok(files)
}
