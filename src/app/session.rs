//! Catalog session: the explicit state container the UI binds to.
//!
//! [`CatalogSession`] owns the full record collection, the current filter
//! state, and the derived filtered view plus statistics. It replaces implicit
//! global state with an injectable object: the query and statistics engines
//! receive the collection and filter as explicit arguments, so they stay pure
//! and independently testable.
//!
//! # State components
//!
//! - **Records**: immutable snapshot of the last successful load
//! - **Filter**: current [`FilterState`], mutated by partial updates
//! - **Filtered view**: re-derived from the full collection on every change
//! - **Stats**: recomputed whenever the full collection changes
//!
//! Loads are last-write-wins: replacing the records swaps the whole
//! collection and re-derives everything; there are no partial updates.

use crate::domain::ApplicationRecord;
use crate::query::{self, CatalogStats, FilterState, FilterUpdate};

/// Central state container over a loaded catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogSession {
    /// Full record collection from the last successful load.
    records: Vec<ApplicationRecord>,

    /// Current user-controlled query parameters.
    filter: FilterState,

    /// Filtered, sorted view derived from `records` and `filter`.
    filtered: Vec<ApplicationRecord>,

    /// Aggregate metrics over the full collection.
    stats: CatalogStats,
}

impl CatalogSession {
    /// Creates a session over an initial record collection.
    ///
    /// The filter starts at its defaults, so the initial view is the full
    /// collection sorted ascending by name.
    #[must_use]
    pub fn new(records: Vec<ApplicationRecord>) -> Self {
        let mut session = Self {
            records,
            filter: FilterState::default(),
            filtered: Vec::new(),
            stats: CatalogStats::default(),
        };
        session.recompute_stats();
        session.apply_filters();
        session
    }

    /// Replaces the record collection wholesale.
    ///
    /// The previous snapshot is discarded, statistics are recomputed, and the
    /// filtered view is re-derived under the current filter. Callers treat
    /// each load as independent; the latest result wins.
    pub fn replace_records(&mut self, records: Vec<ApplicationRecord>) {
        tracing::debug!(record_count = records.len(), "replacing catalog records");
        self.records = records;
        self.recompute_stats();
        self.apply_filters();
    }

    /// Applies a partial filter update and immediately re-derives the view.
    pub fn update_filter(&mut self, update: FilterUpdate) {
        self.filter.merge(update);
        self.apply_filters();
    }

    /// Resets the filter to its defaults and re-derives the view.
    pub fn reset_filter(&mut self) {
        self.filter = FilterState::default();
        self.apply_filters();
    }

    /// Returns the full record collection.
    #[must_use]
    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    /// Returns the current filtered, sorted view.
    #[must_use]
    pub fn filtered(&self) -> &[ApplicationRecord] {
        &self.filtered
    }

    /// Returns the current filter state.
    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Returns the aggregate metrics over the full collection.
    #[must_use]
    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    /// Looks up a record by its unique name.
    #[must_use]
    pub fn record_by_name(&self, name: &str) -> Option<&ApplicationRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Re-derives the filtered view from the full collection.
    ///
    /// Always filter-then-sort, applied fresh; never an incremental diff of
    /// the previous view.
    fn apply_filters(&mut self) {
        self.filtered = query::apply(&self.records, &self.filter);
        tracing::debug!(
            total = self.records.len(),
            visible = self.filtered.len(),
            "filters applied"
        );
    }

    /// Recomputes statistics from scratch over the full collection.
    fn recompute_stats(&mut self) {
        self.stats = query::summarize(&self.records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{PlatformFilter, SortDirection, SortKey};

    fn record(name: &str, price: f64, rating: f64, platforms: &str) -> ApplicationRecord {
        let mut r = ApplicationRecord::empty(name);
        r.price = price;
        r.rating = rating;
        r.platforms = platforms.to_string();
        r
    }

    fn sample() -> Vec<ApplicationRecord> {
        vec![
            record("Charlie", 30.0, 70.0, "Web"),
            record("alpha", 0.0, 90.0, "Mac"),
            record("Bravo", 10.0, 80.0, "Mac, iOS"),
        ]
    }

    #[test]
    fn new_session_sorts_by_name_ascending() {
        let session = CatalogSession::new(sample());
        let names: Vec<&str> = session.filtered().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn filter_updates_rederive_the_view_immediately() {
        let mut session = CatalogSession::new(sample());
        session.update_filter(FilterUpdate {
            platform: Some(PlatformFilter::Ios),
            ..FilterUpdate::default()
        });

        assert_eq!(session.filtered().len(), 1);
        assert_eq!(session.filtered()[0].name, "Bravo");
        // The full collection is untouched.
        assert_eq!(session.records().len(), 3);
    }

    #[test]
    fn updates_compose_incrementally() {
        let mut session = CatalogSession::new(sample());
        session.update_filter(FilterUpdate {
            min_rating: Some(75.0),
            ..FilterUpdate::default()
        });
        session.update_filter(FilterUpdate {
            sort_key: Some(SortKey::Rating),
            sort_direction: Some(SortDirection::Descending),
            ..FilterUpdate::default()
        });

        let names: Vec<&str> = session.filtered().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Bravo"]);
        assert_eq!(session.filter().min_rating, 75.0);
    }

    #[test]
    fn replace_records_is_last_write_wins() {
        let mut session = CatalogSession::new(sample());
        session.replace_records(vec![record("Solo", 5.0, 50.0, "Mac")]);

        assert_eq!(session.records().len(), 1);
        assert_eq!(session.stats().total_apps, 1);
        assert_eq!(session.filtered().len(), 1);
    }

    #[test]
    fn stats_track_the_full_collection_not_the_view() {
        let mut session = CatalogSession::new(sample());
        session.update_filter(FilterUpdate {
            search_term: Some("alpha".to_string()),
            ..FilterUpdate::default()
        });

        assert_eq!(session.filtered().len(), 1);
        assert_eq!(session.stats().total_apps, 3);
    }

    #[test]
    fn reset_restores_the_default_view() {
        let mut session = CatalogSession::new(sample());
        session.update_filter(FilterUpdate {
            search_term: Some("nothing-matches".to_string()),
            ..FilterUpdate::default()
        });
        assert!(session.filtered().is_empty());

        session.reset_filter();
        assert_eq!(session.filtered().len(), 3);
    }

    #[test]
    fn record_lookup_by_name() {
        let session = CatalogSession::new(sample());
        assert!(session.record_by_name("Bravo").is_some());
        assert!(session.record_by_name("missing").is_none());
    }
}
