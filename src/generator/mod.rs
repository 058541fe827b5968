//! Journal list generation.
//!
//! The [`Generator`] owns an open store and performs one linear pass over the
//! abbreviation lists in its source directory:
//!
//! ```text
//! source dir ──list *.csv──► ignore set? ──no──► parse ──dedupe by name──► FullToAbbreviation
//!                                 │
//!                                 └─yes──► skipped
//! ```
//!
//! Duplicate full names are resolved last-write-wins, both inside one file and
//! across files (files are processed in file name order). The first I/O or parse
//! failure aborts the whole pass.

use crate::domain::error::Result;
use crate::domain::Abbreviation;
use crate::infrastructure::{is_ignored, list_csv_files};
use crate::parser::read_abbreviations_from_csv_file;
use crate::storage::{JournalStore, MvStore};
use crate::Config;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of a [`Generator::generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The source directory does not exist; nothing was done.
    SourceMissing(PathBuf),

    /// All lists were processed.
    Generated(GenerateReport),
}

/// Per-file summary of a completed pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Imported files with the number of distinct names each contributed.
    pub processed: Vec<(String, usize)>,

    /// Files skipped because they are on the ignore list.
    pub ignored: Vec<String>,
}

impl GenerateReport {
    /// Total distinct names merged, summed per file.
    #[must_use]
    pub fn merged_count(&self) -> usize {
        self.processed.iter().map(|(_, count)| count).sum()
    }
}

/// Builds the journal list store from a directory of abbreviation CSV files.
pub struct Generator {
    store: Box<dyn JournalStore>,
    source_dir: PathBuf,
    output_dir: Option<PathBuf>,
}

impl Generator {
    /// Opens or creates the store at `config.store_path` and prepares a pass over
    /// `config.source_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened.
    pub fn open(config: &Config) -> Result<Self> {
        let store = MvStore::open(&config.store_path)?;
        Ok(Self {
            store: Box::new(store),
            source_dir: config.source_dir.clone(),
            output_dir: config.store_path.parent().map(Path::to_path_buf),
        })
    }

    /// Wraps an already open store.
    #[must_use]
    pub fn with_store(store: Box<dyn JournalStore>, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            source_dir: source_dir.into(),
            output_dir: None,
        }
    }

    /// Read access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &dyn JournalStore {
        self.store.as_ref()
    }

    /// Runs one pass, printing progress to stdout.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or parse error; the remaining files are not processed.
    pub fn generate(&mut self) -> Result<GenerateOutcome> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.generate_with_output(&mut out)
    }

    /// Runs one pass, printing progress to `out`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or parse error; the remaining files are not processed.
    pub fn generate_with_output<W: Write>(&mut self, out: &mut W) -> Result<GenerateOutcome> {
        let _span = tracing::info_span!("generate", source_dir = ?self.source_dir).entered();

        if !self.source_dir.exists() {
            let absolute = std::env::current_dir()
                .map(|cwd| cwd.join(&self.source_dir))
                .unwrap_or_else(|_| self.source_dir.clone());
            writeln!(out, "Path {} does not exist", absolute.display())?;
            tracing::info!("source directory missing, nothing to generate");
            return Ok(GenerateOutcome::SourceMissing(absolute));
        }

        if let Some(output_dir) = &self.output_dir {
            std::fs::create_dir_all(output_dir)?;
        }

        let mut report = GenerateReport::default();
        for path in list_csv_files(&self.source_dir)? {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            write!(out, "Checking {file_name}")?;
            if is_ignored(&file_name) {
                writeln!(out, " ignored")?;
                tracing::debug!(file = %file_name, "ignored");
                report.ignored.push(file_name);
                continue;
            }
            writeln!(out, "...")?;

            let abbreviations = read_abbreviations_from_csv_file(&path)?;
            let by_name = index_by_name(abbreviations);
            let count = by_name.len();
            self.store.put_all_abbreviations(by_name);

            tracing::info!(file = %file_name, count, "merged abbreviations");
            report.processed.push((file_name, count));
        }

        tracing::info!(
            files = report.processed.len(),
            ignored = report.ignored.len(),
            total = self.store.abbreviation_count(),
            "generation complete"
        );
        Ok(GenerateOutcome::Generated(report))
    }

    /// Increments the view count of `citation_key` by one.
    pub fn update_view_count(&mut self, citation_key: &str) {
        let current = self.store.view_count(citation_key);
        self.store.set_view_count(citation_key, current.saturating_add(1));
    }

    /// Returns the view count of `citation_key`, `0` if it was never viewed.
    #[must_use]
    pub fn view_count(&self, citation_key: &str) -> u64 {
        self.store.view_count(citation_key)
    }

    /// Flushes all writes and releases the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn close(mut self) -> Result<()> {
        self.store.flush()
    }
}

/// Keys records by full name; later rows replace earlier ones.
fn index_by_name(abbreviations: Vec<Abbreviation>) -> BTreeMap<String, Abbreviation> {
    let mut by_name = BTreeMap::new();
    for abbreviation in abbreviations {
        if let Some(previous) = by_name.insert(abbreviation.name().to_string(), abbreviation) {
            tracing::trace!(name = %previous.name(), "duplicate name in file, keeping later row");
        }
    }
    by_name
}
