//! On-disk container for the journal list maps.

use crate::domain::Abbreviation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current version of the store file format.
pub const FORMAT_VERSION: u32 = 1;

/// Name of the full name → abbreviation map.
pub const FULL_TO_ABBREVIATION: &str = "FullToAbbreviation";

/// Name of the citation key → view count map.
pub const VIEW_COUNTS: &str = "ViewCounts";

/// Top-level structure serialized into the store file.
///
/// The serde renames of the two maps must match [`FULL_TO_ABBREVIATION`] and
/// [`VIEW_COUNTS`].
///
/// Both maps are ordered so the encoded output is stable across runs with the
/// same content. Missing maps decode as empty, which is how a map gets "created"
/// on first open.
///
/// ```json
/// {
///   "version": 1,
///   "updated_at": 1700000000,
///   "FullToAbbreviation": {
///     "Journal of Foo": {
///       "name": "Journal of Foo",
///       "abbreviation": "J. Foo",
///       "dotless_abbreviation": "J Foo",
///       "shortest_unique_abbreviation": ""
///     }
///   },
///   "ViewCounts": { "exampleCitationKey": 1 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    /// Version of the storage format.
    pub version: u32,

    /// Unix timestamp of the last save, `None` if never saved.
    #[serde(default)]
    pub updated_at: Option<i64>,

    #[serde(rename = "FullToAbbreviation", default)]
    pub full_to_abbreviation: BTreeMap<String, Abbreviation>,

    #[serde(rename = "ViewCounts", default)]
    pub view_counts: BTreeMap<String, u64>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            updated_at: None,
            full_to_abbreviation: BTreeMap::new(),
            view_counts: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_names_are_used_as_keys() {
        let mut data = StoreData::default();
        data.view_counts.insert("key".to_string(), 3);

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json[VIEW_COUNTS]["key"], 3);
        assert!(json[FULL_TO_ABBREVIATION].as_object().unwrap().is_empty());
    }

    #[test]
    fn encoded_map_keys_match_map_names() {
        let mut data = StoreData::default();
        data.full_to_abbreviation.insert(
            "Journal of Foo".to_string(),
            Abbreviation::new("Journal of Foo", "J. Foo", ""),
        );
        data.view_counts.insert("key".to_string(), 1);

        let json = serde_json::to_value(&data).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();

        assert!(keys.contains(&FULL_TO_ABBREVIATION));
        assert!(keys.contains(&VIEW_COUNTS));
        assert_eq!(json[FULL_TO_ABBREVIATION]["Journal of Foo"]["abbreviation"], "J. Foo");
        assert_eq!(json[VIEW_COUNTS]["key"], 1);
    }

    #[test]
    fn absent_maps_decode_empty() {
        let data: StoreData = serde_json::from_str(r#"{"version":1}"#).unwrap();
        assert!(data.full_to_abbreviation.is_empty());
        assert!(data.view_counts.is_empty());
        assert!(data.updated_at.is_none());
    }
}
