//! Fixed locations of the generator's input and output.
//!
//! Both paths are relative to the working directory the build invokes the
//! generator from. Nothing here consults the environment.

use std::path::PathBuf;

/// File names skipped when scanning the source directory.
///
/// These lists are legacy or format duplicates of lists that are already
/// imported. Matching is exact and case-sensitive.
pub const IGNORED_FILE_NAMES: [&str; 4] = [
    "journal_abbreviations_entrez.csv",
    "journal_abbreviations_medicus.csv",
    "journal_abbreviations_webofscience-dotless.csv",
    "journal_abbreviations_ieee_strings.csv",
];

/// Returns the directory containing the abbreviation CSV lists.
///
/// # Examples
///
/// ```
/// use journal_list::infrastructure::abbreviations_dir;
///
/// assert!(abbreviations_dir().ends_with("abbrv.jabref.org/journals"));
/// ```
#[must_use]
pub fn abbreviations_dir() -> PathBuf {
    ["buildres", "abbrv.jabref.org", "journals"].iter().collect()
}

/// Returns the path of the generated map store.
///
/// # Examples
///
/// ```
/// use journal_list::infrastructure::journal_list_store_file;
///
/// let path = journal_list_store_file();
/// assert_eq!(path.file_name().unwrap(), "journal-list.mv");
/// ```
#[must_use]
pub fn journal_list_store_file() -> PathBuf {
    ["build", "resources", "main", "journals", "journal-list.mv"]
        .iter()
        .collect()
}

/// Returns whether a CSV file name is on the ignore list.
#[must_use]
pub fn is_ignored(file_name: &str) -> bool {
    IGNORED_FILE_NAMES.contains(&file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_list_is_case_sensitive() {
        assert!(is_ignored("journal_abbreviations_medicus.csv"));
        assert!(!is_ignored("Journal_Abbreviations_Medicus.csv"));
        assert!(!is_ignored("journal_abbreviations_acs.csv"));
    }

    #[test]
    fn paths_are_relative() {
        assert!(abbreviations_dir().is_relative());
        assert!(journal_list_store_file().is_relative());
    }
}
