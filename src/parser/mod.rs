//! Abbreviation list parsing.
//!
//! Journal lists are header-less CSV files with one journal per row:
//!
//! ```text
//! Physical Review Letters,Phys. Rev. Lett.
//! "Journal of Foo, The";J. Foo;JF
//! ```
//!
//! Column 0 is the full name, column 1 the abbreviation and column 2 an optional
//! shortest unique abbreviation. Lists use either `;` or `,` as delimiter; the
//! first line decides which.

use crate::domain::error::{JournalListError, Result};
use crate::domain::Abbreviation;
use csv::{ReaderBuilder, Trim};
use std::path::Path;

/// Delimiters in order of preference.
const DELIMITERS: [u8; 2] = [b';', b','];

/// Reads every valid abbreviation row from a CSV file.
///
/// Rows with an empty name or abbreviation are skipped. Records are returned in
/// file order, duplicates included; deduplication is up to the caller.
///
/// # Errors
///
/// Returns [`JournalListError::Io`] if the file cannot be read and
/// [`JournalListError::Csv`] if a row is not valid CSV or not valid UTF-8.
pub fn read_abbreviations_from_csv_file(path: &Path) -> Result<Vec<Abbreviation>> {
    let _span = tracing::debug_span!("read_abbreviations", path = ?path).entered();

    let contents = std::fs::read(path)?;
    parse_abbreviations(&contents).map_err(|source| JournalListError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses abbreviation rows from raw CSV bytes.
///
/// # Errors
///
/// Returns the underlying [`csv::Error`] on the first malformed row.
pub fn parse_abbreviations(contents: &[u8]) -> std::result::Result<Vec<Abbreviation>, csv::Error> {
    let delimiter = detect_delimiter(contents);
    tracing::trace!(delimiter = %char::from(delimiter), "detected delimiter");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(contents);

    let mut abbreviations = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(0).unwrap_or_default();
        let abbreviation = record.get(1).unwrap_or_default();

        if name.is_empty() || abbreviation.is_empty() {
            tracing::debug!(
                line = record.position().map(csv::Position::line),
                "skipping row without name or abbreviation"
            );
            continue;
        }

        let shortest_unique = record.get(2).unwrap_or_default();
        abbreviations.push(Abbreviation::new(name, abbreviation, shortest_unique));
    }

    tracing::debug!(count = abbreviations.len(), "parsed abbreviations");
    Ok(abbreviations)
}

/// Picks the delimiter from the first line, defaulting to `,`.
fn detect_delimiter(contents: &[u8]) -> u8 {
    let first_line = contents
        .split(|&b| b == b'\n')
        .next()
        .unwrap_or_default();

    DELIMITERS
        .into_iter()
        .find(|delimiter| first_line.contains(delimiter))
        .unwrap_or(b',')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_comma_separated_rows() {
        let abbreviations =
            parse_abbreviations(b"Journal of Foo,J. Foo\nBar Letters,Bar Lett.,BL\n").unwrap();

        assert_eq!(
            abbreviations,
            vec![
                Abbreviation::new("Journal of Foo", "J. Foo", ""),
                Abbreviation::new("Bar Letters", "Bar Lett.", "BL"),
            ]
        );
    }

    #[test]
    fn detects_semicolon_delimiter() {
        let abbreviations =
            parse_abbreviations(b"\"Journal of Foo, The\";J. Foo;JF\nBar; Bar\n").unwrap();

        assert_eq!(abbreviations.len(), 2);
        assert_eq!(abbreviations[0].name(), "Journal of Foo, The");
        assert_eq!(abbreviations[0].shortest_unique_abbreviation(), "JF");
        assert_eq!(abbreviations[1].abbreviation(), "Bar");
    }

    #[test]
    fn skips_incomplete_and_blank_rows() {
        let abbreviations =
            parse_abbreviations(b"Journal of Foo,J. Foo\n\n,Orphan\nNo Abbreviation\nBaz,Bz\n")
                .unwrap();

        let names: Vec<&str> = abbreviations.iter().map(Abbreviation::name).collect();
        assert_eq!(names, vec!["Journal of Foo", "Baz"]);
    }

    #[test]
    fn keeps_duplicate_rows_in_file_order() {
        let abbreviations = parse_abbreviations(b"Foo,F1\nFoo,F2\n").unwrap();
        assert_eq!(abbreviations.len(), 2);
        assert_eq!(abbreviations[1].abbreviation(), "F2");
    }

    #[test]
    fn invalid_utf8_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.csv");
        std::fs::write(&path, [0xff, 0xfe, b',', b'x', b'\n']).unwrap();

        let err = read_abbreviations_from_csv_file(&path).unwrap_err();
        match err {
            JournalListError::Csv { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_abbreviations_from_csv_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, JournalListError::Io(_)));
    }
}
