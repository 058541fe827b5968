//! Journal abbreviation record.
//!
//! An [`Abbreviation`] ties a journal's full name to its abbreviated forms. The
//! full name is the identity key used by the `FullToAbbreviation` map.

use serde::{Deserialize, Serialize};

/// One journal's full name and its abbreviated forms.
///
/// Records are immutable once built. The dotless form is derived from the
/// abbreviation at construction time.
///
/// # Examples
///
/// ```
/// use journal_list::Abbreviation;
///
/// let abbreviation = Abbreviation::new("Physical Review Letters", "Phys. Rev. Lett.", "");
/// assert_eq!(abbreviation.dotless_abbreviation(), "Phys Rev Lett");
/// assert_eq!(abbreviation.shortest_unique_abbreviation(), "Phys. Rev. Lett.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Abbreviation {
    name: String,
    abbreviation: String,
    dotless_abbreviation: String,
    #[serde(default)]
    shortest_unique_abbreviation: String,
}

impl Abbreviation {
    /// Creates a record. Pass an empty `shortest_unique_abbreviation` when the
    /// source list has none.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        shortest_unique_abbreviation: impl AsRef<str>,
    ) -> Self {
        let abbreviation = abbreviation.into();
        let dotless_abbreviation = abbreviation
            .replace('.', " ")
            .replace("  ", " ")
            .trim()
            .to_string();

        Self {
            name: name.into(),
            abbreviation,
            dotless_abbreviation,
            shortest_unique_abbreviation: shortest_unique_abbreviation.as_ref().trim().to_string(),
        }
    }

    /// Full journal name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Abbreviated form as listed, dots included.
    #[must_use]
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Abbreviation with dots removed and spacing normalized.
    #[must_use]
    pub fn dotless_abbreviation(&self) -> &str {
        &self.dotless_abbreviation
    }

    /// Shortest unique abbreviation, falling back to [`Self::abbreviation`] when
    /// the source list did not provide one.
    #[must_use]
    pub fn shortest_unique_abbreviation(&self) -> &str {
        if self.shortest_unique_abbreviation.is_empty() {
            &self.abbreviation
        } else {
            &self.shortest_unique_abbreviation
        }
    }

    /// Returns whether the shortest unique abbreviation is just the abbreviation.
    #[must_use]
    pub fn is_default_shortest_unique_abbreviation(&self) -> bool {
        self.shortest_unique_abbreviation() == self.abbreviation
    }
}
