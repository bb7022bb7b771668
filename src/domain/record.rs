//! Application record domain model.
//!
//! This module defines the core [`ApplicationRecord`] type representing one
//! normalized catalog entry, along with the [`PlatformSupport`] detail attached
//! to each supported platform tag. Records are created once per load, are
//! immutable thereafter, and are discarded wholesale on reload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-platform support detail attached to a record.
///
/// Synthesized at load time from the record's platform tags when the source
/// does not supply explicit support information. Minimum OS versions default
/// to the catalog-wide baselines (macOS 10.15, iOS 14.0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSupport {
    /// Minimum OS version required on this platform, e.g. `"macOS 10.15"`.
    pub min_version: String,

    /// Short capability notes for this platform.
    pub features: Vec<String>,
}

/// One normalized catalog entry.
///
/// An `ApplicationRecord` is produced by the loader from a raw CSV row after
/// field coercion and enrichment. Invariants established at load time:
///
/// - `name` is non-empty (rows failing this are dropped by the loader)
/// - `price` is a non-negative number (unparsable values coerce to 0; 0 means free)
/// - `rating` lies in `[0, 100]`
///
/// The raw `platforms` string is kept verbatim for display; tag matching is
/// case-insensitive substring based via [`supports_platform`](Self::supports_platform),
/// so `"Mac, iOS"` satisfies a `"mac"` filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Display name, unique key within a load.
    pub name: String,

    /// Free-text functional description.
    pub description: String,

    /// Optional URL to the record's store page.
    pub store_link: Option<String>,

    /// Optional URL to the vendor's own site.
    pub vendor_site: Option<String>,

    /// Subscription price after coercion. 0 means free.
    pub price: f64,

    /// Rating on a 0-100 scale, clamped at load time.
    pub rating: f64,

    /// Raw comma-separated platform string, e.g. `"Mac, iOS"`.
    pub platforms: String,

    /// Vendor name, when known.
    pub developer: Option<String>,

    /// Category label, from the source or inferred from the description.
    pub category: Option<String>,

    /// Last-updated date string, when supplied by the source.
    pub last_updated: Option<String>,

    /// Download size string, when supplied by the source.
    pub size: Option<String>,

    /// Human-readable system requirements, derived from platform tags when absent.
    pub system_requirements: Option<String>,

    /// Per-platform support detail keyed by canonical tag name.
    pub platform_support: BTreeMap<String, PlatformSupport>,
}

impl ApplicationRecord {
    /// Returns the record's platform tags as trimmed tokens.
    ///
    /// Splits the raw platform string on commas and trims each token. Empty
    /// tokens are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use appdex::domain::ApplicationRecord;
    /// # let mut record = ApplicationRecord::empty("Demo");
    /// record.platforms = "Mac, iOS".to_string();
    /// assert_eq!(record.platform_tags(), vec!["Mac", "iOS"]);
    /// ```
    #[must_use]
    pub fn platform_tags(&self) -> Vec<&str> {
        self.platforms
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Returns true if the record's platform string contains the given tag,
    /// compared case-insensitively.
    ///
    /// Matching is substring based over the raw platform string, so a record
    /// with `"Mac, iOS"` supports both `"mac"` and `"ios"`.
    #[must_use]
    pub fn supports_platform(&self, tag: &str) -> bool {
        self.platforms.to_lowercase().contains(&tag.to_lowercase())
    }

    /// Returns true if the record is free (price is exactly 0).
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Creates a minimal record with the given name and defaults elsewhere.
    ///
    /// Intended for tests and examples; the loader is the normal constructor.
    #[must_use]
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            store_link: None,
            vendor_site: None,
            price: 0.0,
            rating: 0.0,
            platforms: String::new(),
            developer: None,
            category: None,
            last_updated: None,
            size: None,
            system_requirements: None,
            platform_support: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_tags_split_and_trim() {
        let mut record = ApplicationRecord::empty("A");
        record.platforms = "Mac, iOS ,Web".to_string();
        assert_eq!(record.platform_tags(), vec!["Mac", "iOS", "Web"]);
    }

    #[test]
    fn platform_matching_is_case_insensitive_substring() {
        let mut record = ApplicationRecord::empty("A");
        record.platforms = "Mac, iOS".to_string();
        assert!(record.supports_platform("mac"));
        assert!(record.supports_platform("iOS"));
        assert!(!record.supports_platform("web"));
    }

    #[test]
    fn zero_price_means_free() {
        let record = ApplicationRecord::empty("A");
        assert!(record.is_free());
    }
}
