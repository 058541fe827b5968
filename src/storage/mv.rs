//! Compressed map store backend.
//!
//! The whole store is one gzip stream holding a JSON document with both named
//! maps (see [`StoreData`]). It is loaded into memory on open and written back on
//! flush using atomic file writes (write-to-temp + rename).
//!
//! # Performance Characteristics
//!
//! - **Open**: O(n) - decompresses and decodes the entire file once
//! - **Read/Write**: O(log n) - in-memory ordered maps
//! - **Flush**: O(n) - re-encodes and compresses the entire dataset

use crate::domain::error::{JournalListError, Result};
use crate::domain::Abbreviation;
use crate::storage::backend::JournalStore;
use crate::storage::models::{StoreData, FORMAT_VERSION};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File-backed store for the `FullToAbbreviation` and `ViewCounts` maps.
///
/// # Lifecycle
///
/// Open with [`MvStore::open`], mutate through [`JournalStore`], then call
/// [`MvStore::close`]. Dropping a store with unsaved changes saves them as a last
/// resort, but errors can only be logged at that point.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It assumes a single writer and no
/// concurrent external access to the file.
#[derive(Debug)]
pub struct MvStore {
    /// Path to the store file on disk.
    file_path: PathBuf,

    /// In-memory copy of both maps.
    data: StoreData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl MvStore {
    /// Opens or creates a store file.
    ///
    /// If the file exists its maps are loaded, otherwise both maps start empty.
    /// Parent directories are created automatically. Nothing is written until
    /// the first flush.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but is not a valid store
    /// - The file was written by a newer format version
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening map store");

        if let Some(parent) = file_path.parent() {
            tracing::debug!(parent = ?parent, "creating parent directory");
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            tracing::debug!("loading existing store");
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StoreData::default()
        };

        tracing::debug!(
            abbreviation_count = data.full_to_abbreviation.len(),
            view_count_keys = data.view_counts.len(),
            "map store opened"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Unix timestamp of the last successful save, if any.
    #[must_use]
    pub fn updated_at(&self) -> Option<i64> {
        self.data.updated_at
    }

    /// Flushes pending changes and releases the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the final save fails.
    pub fn close(mut self) -> Result<()> {
        tracing::debug!(path = ?self.file_path, "closing map store");
        self.save_to_file()
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let reader = BufReader::new(GzDecoder::new(File::open(path)?));
        let data: StoreData = serde_json::from_reader(reader)
            .map_err(|e| JournalListError::Storage(format!("failed to parse store: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(JournalListError::Storage(format!(
                "unsupported store version {} (expected at most {FORMAT_VERSION})",
                data.version
            )));
        }

        tracing::debug!(version = data.version, "loaded store data");
        Ok(data)
    }

    /// Saves the maps using an atomic write.
    ///
    /// Encodes into a sibling temporary file, then renames it over the target so
    /// the store is never left half-written.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving map store");
        self.data.updated_at = Some(chrono::Utc::now().timestamp());

        let tmp_path = self.file_path.with_extension("tmp");
        if let Err(e) = self.write_and_replace(&tmp_path) {
            if let Err(cleanup) = std::fs::remove_file(&tmp_path) {
                tracing::trace!(error = %cleanup, "no temporary file to remove");
            }
            return Err(e);
        }

        self.dirty = false;
        tracing::debug!("map store saved");
        Ok(())
    }

    /// Encodes into `tmp_path`, then renames it onto the store file.
    fn write_and_replace(&self, tmp_path: &Path) -> Result<()> {
        let file = File::create(tmp_path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        serde_json::to_writer(&mut encoder, &self.data)
            .map_err(|e| JournalListError::Storage(format!("failed to encode store: {e}")))?;
        encoder.finish()?.flush()?;

        tracing::trace!(tmp_path = ?tmp_path, "renaming temporary file to final location");
        std::fs::rename(tmp_path, &self.file_path)?;
        Ok(())
    }
}

impl JournalStore for MvStore {
    fn put_all_abbreviations(&mut self, abbreviations: BTreeMap<String, Abbreviation>) {
        let _span = tracing::debug_span!("put_all_abbreviations", count = abbreviations.len()).entered();

        if abbreviations.is_empty() {
            return;
        }

        for (name, abbreviation) in abbreviations {
            if let Some(previous) = self.data.full_to_abbreviation.insert(name, abbreviation) {
                tracing::trace!(name = %previous.name(), "replaced existing abbreviation");
            }
        }
        self.dirty = true;

        tracing::debug!(total = self.data.full_to_abbreviation.len(), "abbreviations merged");
    }

    fn abbreviation(&self, name: &str) -> Option<Abbreviation> {
        self.data.full_to_abbreviation.get(name).cloned()
    }

    fn abbreviation_count(&self) -> usize {
        self.data.full_to_abbreviation.len()
    }

    fn abbreviation_names(&self) -> Vec<String> {
        self.data.full_to_abbreviation.keys().cloned().collect()
    }

    fn view_count(&self, citation_key: &str) -> u64 {
        self.data.view_counts.get(citation_key).copied().unwrap_or(0)
    }

    fn set_view_count(&mut self, citation_key: &str, count: u64) {
        tracing::debug!(citation_key = %citation_key, count, "setting view count");
        self.data.view_counts.insert(citation_key.to_string(), count);
        self.dirty = true;
    }

    fn flush(&mut self) -> Result<()> {
        self.save_to_file()
    }
}

impl Drop for MvStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty store on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
