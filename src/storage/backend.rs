//! Storage backend abstraction.
//!
//! This module defines the [`JournalStore`] trait over the two named maps the
//! generator writes. The trait is minimal: each method maps directly to a use case
//! in [`crate::generator::Generator`], not to a generic key-value API.

use crate::domain::error::Result;
use crate::domain::Abbreviation;
use std::collections::BTreeMap;

/// Abstraction over the persistent journal list store.
///
/// Implementations hold a `FullToAbbreviation` map keyed by full journal name and
/// a `ViewCounts` map keyed by citation key. Writes may be buffered until
/// [`flush`](JournalStore::flush).
///
/// # Implementations
///
/// - [`MvStore`](crate::storage::MvStore): gzip-compressed JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use journal_list::storage::{JournalStore, MvStore};
///
/// let mut store = MvStore::open("build/journal-list.mv")?;
/// store.set_view_count("key", 2);
/// store.flush()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait JournalStore: Send {
    /// Merges records into the `FullToAbbreviation` map.
    ///
    /// Existing entries with the same full name are replaced.
    fn put_all_abbreviations(&mut self, abbreviations: BTreeMap<String, Abbreviation>);

    /// Looks up the record stored for a full journal name.
    fn abbreviation(&self, name: &str) -> Option<Abbreviation>;

    /// Number of entries in the `FullToAbbreviation` map.
    fn abbreviation_count(&self) -> usize;

    /// Full names in the `FullToAbbreviation` map, in key order.
    fn abbreviation_names(&self) -> Vec<String>;

    /// Returns the stored view count, `0` for unknown keys.
    fn view_count(&self, citation_key: &str) -> u64;

    /// Stores `count` as the view count of `citation_key`, replacing any previous value.
    fn set_view_count(&mut self, citation_key: &str, count: u64);

    /// Persists pending changes.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing the store fails.
    fn flush(&mut self) -> Result<()>;
}
