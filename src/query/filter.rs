//! Filter state and the composable filter/sort query engine.
//!
//! This module defines [`FilterState`], the user-controlled query parameters,
//! and the pure functions that derive a view from the full record collection:
//! [`filter_records`] (conjunction of active predicates) followed by
//! [`sort_records`] (stable, deterministic comparator). The composition is
//! exposed as [`apply`] and is always filter-then-sort, recomputed fresh from
//! the full collection on every filter-state change rather than incrementally
//! diffed.

use crate::domain::ApplicationRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Platform selector within a filter.
///
/// `All` matches everything; a specific tag requires case-insensitive
/// substring presence of the tag within the record's platform string, so
/// `Ios` matches `"Mac, iOS"`. `CrossPlatform` requires both the Mac and iOS
/// tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformFilter {
    /// No platform restriction.
    #[default]
    All,
    /// Records whose platform string contains "mac".
    Mac,
    /// Records whose platform string contains "ios".
    Ios,
    /// Records whose platform string contains "web".
    Web,
    /// Records supporting both Mac and iOS.
    CrossPlatform,
}

impl PlatformFilter {
    /// Returns true if the record passes this platform selector.
    #[must_use]
    pub fn matches(self, record: &ApplicationRecord) -> bool {
        match self {
            Self::All => true,
            Self::Mac => record.supports_platform("mac"),
            Self::Ios => record.supports_platform("ios"),
            Self::Web => record.supports_platform("web"),
            Self::CrossPlatform => {
                record.supports_platform("mac") && record.supports_platform("ios")
            }
        }
    }
}

impl FromStr for PlatformFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "mac" => Ok(Self::Mac),
            "ios" => Ok(Self::Ios),
            "web" => Ok(Self::Web),
            "cross-platform" => Ok(Self::CrossPlatform),
            other => Err(format!("unknown platform filter: {other}")),
        }
    }
}

/// Field used for ordering the filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Case-insensitive by record name.
    #[default]
    Name,
    /// Numeric by coerced price.
    Price,
    /// Numeric by rating.
    Rating,
    /// Case-insensitive by raw platform string.
    Platform,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "rating" => Ok(Self::Rating),
            "platform" => Ok(Self::Platform),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Direction of the sort comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first; flips the comparator outcome, not merely the output.
    Descending,
}

/// User-controlled query parameters.
///
/// All active sub-conditions are ANDed. The price range lower bound is always
/// 0 in this design; only the ceiling is adjustable. Defaults match the
/// initial UI state: empty search, all platforms, full price range, zero
/// rating floor, ascending name sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive free-text term matched against name or description.
    /// Empty matches everything.
    pub search_term: String,

    /// Platform selector.
    pub platform: PlatformFilter,

    /// Inclusive price ceiling; records must satisfy `0 <= price <= ceiling`.
    pub price_ceiling: f64,

    /// Minimum rating; records must satisfy `rating >= floor`.
    pub min_rating: f64,

    /// Field to order by.
    pub sort_key: SortKey,

    /// Sort direction.
    pub sort_direction: SortDirection,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            platform: PlatformFilter::All,
            price_ceiling: 500.0,
            min_rating: 0.0,
            sort_key: SortKey::Name,
            sort_direction: SortDirection::Ascending,
        }
    }
}

impl FilterState {
    /// Returns true if the record satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        if !self.search_term.is_empty() {
            let term = self.search_term.to_lowercase();
            let in_name = record.name.to_lowercase().contains(&term);
            let in_description = record.description.to_lowercase().contains(&term);
            if !in_name && !in_description {
                return false;
            }
        }

        if !self.platform.matches(record) {
            return false;
        }

        if record.price < 0.0 || record.price > self.price_ceiling {
            return false;
        }

        record.rating >= self.min_rating
    }

    /// Applies a partial update, leaving unset fields untouched.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(search_term) = update.search_term {
            self.search_term = search_term;
        }
        if let Some(platform) = update.platform {
            self.platform = platform;
        }
        if let Some(price_ceiling) = update.price_ceiling {
            self.price_ceiling = price_ceiling;
        }
        if let Some(min_rating) = update.min_rating {
            self.min_rating = min_rating;
        }
        if let Some(sort_key) = update.sort_key {
            self.sort_key = sort_key;
        }
        if let Some(sort_direction) = update.sort_direction {
            self.sort_direction = sort_direction;
        }
    }
}

/// A partial filter-state update.
///
/// Every field is optional; `None` leaves the corresponding [`FilterState`]
/// field unchanged. Sessions apply updates incrementally and re-derive the
/// filtered view on every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterUpdate {
    pub search_term: Option<String>,
    pub platform: Option<PlatformFilter>,
    pub price_ceiling: Option<f64>,
    pub min_rating: Option<f64>,
    pub sort_key: Option<SortKey>,
    pub sort_direction: Option<SortDirection>,
}

/// Returns the subset of records satisfying the filter, preserving order.
///
/// Pure transformation: the input collection is never mutated. An empty
/// (default-search, all-platform, full-range) filter returns exactly the
/// input records in the same order.
#[must_use]
pub fn filter_records(
    records: &[ApplicationRecord],
    filter: &FilterState,
) -> Vec<ApplicationRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Sorts records in place by the given key and direction.
///
/// Uses a stable sort so ties preserve their original relative order. String
/// fields compare case-insensitively; numeric fields compare by total order,
/// so the result is deterministic even for equal keys.
pub fn sort_records(records: &mut [ApplicationRecord], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Rating => a.rating.total_cmp(&b.rating),
            SortKey::Platform => a.platforms.to_lowercase().cmp(&b.platforms.to_lowercase()),
        };

        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Derives the filtered, sorted view for the given filter state.
///
/// Composed as filter-then-sort, always in that order, applied fresh from the
/// full collection. No pagination: the caller decides how much of the view to
/// render.
#[must_use]
pub fn apply(records: &[ApplicationRecord], filter: &FilterState) -> Vec<ApplicationRecord> {
    let mut view = filter_records(records, filter);
    sort_records(&mut view, filter.sort_key, filter.sort_direction);
    view
}

/// Compares two records under a sort key's field rule, ascending.
///
/// Exposed for property-style assertions over sorted output.
#[must_use]
pub fn compare_by_key(a: &ApplicationRecord, b: &ApplicationRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Rating => a.rating.total_cmp(&b.rating),
        SortKey::Platform => a.platforms.to_lowercase().cmp(&b.platforms.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApplicationRecord;

    fn record(name: &str, price: f64, rating: f64, platforms: &str) -> ApplicationRecord {
        let mut r = ApplicationRecord::empty(name);
        r.price = price;
        r.rating = rating;
        r.platforms = platforms.to_string();
        r
    }

    fn sample() -> Vec<ApplicationRecord> {
        vec![
            record("Alpha", 0.0, 90.0, "Mac"),
            record("beta", 9.99, 80.0, "Mac, iOS"),
            record("Gamma", 120.0, 60.0, "Web"),
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let records = sample();
        let filtered = filter_records(&records, &FilterState::default());
        assert_eq!(filtered, records);
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let mut records = sample();
        records[2].description = "An ALPHA-grade editor".to_string();

        let mut filter = FilterState::default();
        filter.search_term = "alpha".to_string();

        let filtered = filter_records(&records, &filter);
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn platform_selector_uses_substring_matching() {
        let records = sample();
        let mut filter = FilterState::default();
        filter.platform = PlatformFilter::Ios;

        let filtered = filter_records(&records, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "beta");
    }

    #[test]
    fn cross_platform_requires_both_tags() {
        let records = sample();
        let mut filter = FilterState::default();
        filter.platform = PlatformFilter::CrossPlatform;

        let filtered = filter_records(&records, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "beta");
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let records = sample();
        let mut filter = FilterState::default();
        filter.price_ceiling = 9.99;

        let filtered = filter_records(&records, &filter);
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta"]);
    }

    #[test]
    fn rating_floor_is_inclusive() {
        let records = sample();
        let mut filter = FilterState::default();
        filter.min_rating = 80.0;

        let filtered = filter_records(&records, &filter);
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta"]);
    }

    #[test]
    fn active_predicates_are_anded() {
        let records = sample();
        let mut filter = FilterState::default();
        filter.platform = PlatformFilter::Mac;
        filter.min_rating = 85.0;

        let filtered = filter_records(&records, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Alpha");
        assert!(filtered.iter().all(|r| filter.matches(r)));
    }

    #[test]
    fn sort_by_name_is_case_insensitive() {
        let mut records = vec![record("B", 0.0, 0.0, ""), record("a", 0.0, 0.0, "")];
        sort_records(&mut records, SortKey::Name, SortDirection::Ascending);
        assert_eq!(records[0].name, "a");
        assert_eq!(records[1].name, "B");

        sort_records(&mut records, SortKey::Name, SortDirection::Descending);
        assert_eq!(records[0].name, "B");
        assert_eq!(records[1].name, "a");
    }

    #[test]
    fn descending_flips_the_comparator() {
        let mut ascending = sample();
        sort_records(&mut ascending, SortKey::Price, SortDirection::Ascending);
        for pair in ascending.windows(2) {
            assert!(compare_by_key(&pair[0], &pair[1], SortKey::Price).is_le());
        }

        let mut descending = sample();
        sort_records(&mut descending, SortKey::Price, SortDirection::Descending);
        for pair in descending.windows(2) {
            assert!(compare_by_key(&pair[0], &pair[1], SortKey::Price).is_ge());
        }
    }

    #[test]
    fn sort_preserves_tie_order() {
        let mut records = vec![
            record("First", 5.0, 0.0, ""),
            record("Second", 5.0, 0.0, ""),
            record("Third", 1.0, 0.0, ""),
        ];
        sort_records(&mut records, SortKey::Price, SortDirection::Ascending);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Third", "First", "Second"]);
    }

    #[test]
    fn merge_applies_only_set_fields() {
        let mut state = FilterState::default();
        state.merge(FilterUpdate {
            search_term: Some("note".to_string()),
            min_rating: Some(50.0),
            ..FilterUpdate::default()
        });

        assert_eq!(state.search_term, "note");
        assert_eq!(state.min_rating, 50.0);
        assert_eq!(state.platform, PlatformFilter::All);
        assert_eq!(state.price_ceiling, 500.0);
    }

    #[test]
    fn selector_parsing_round_trips() {
        assert_eq!("ios".parse::<PlatformFilter>(), Ok(PlatformFilter::Ios));
        assert_eq!(
            "cross-platform".parse::<PlatformFilter>(),
            Ok(PlatformFilter::CrossPlatform)
        );
        assert_eq!("rating".parse::<SortKey>(), Ok(SortKey::Rating));
        assert!("bogus".parse::<SortKey>().is_err());
    }
}
