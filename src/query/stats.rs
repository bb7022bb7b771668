//! Derived catalog statistics.
//!
//! Implements the aggregate metrics shown alongside the catalog: per-platform
//! counts, the Mac∧iOS cross-platform count, and average price/rating.
//! [`summarize`] is a pure function of the record collection and is recomputed
//! from scratch whenever the collection changes; nothing here is mutated
//! independently.

use crate::domain::ApplicationRecord;
use serde::{Deserialize, Serialize};

/// Aggregate metrics over a record collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Total record count.
    pub total_apps: usize,

    /// Records whose platform tags include Mac.
    pub mac_apps: usize,

    /// Records whose platform tags include iOS.
    pub ios_apps: usize,

    /// Records supporting both Mac and iOS.
    ///
    /// Only the Mac+iOS overlap counts; a Web tag never contributes to it.
    pub cross_platform_apps: usize,

    /// Arithmetic mean price; 0 for an empty collection.
    pub average_price: f64,

    /// Arithmetic mean rating; 0 for an empty collection.
    pub average_rating: f64,
}

/// Computes aggregate metrics over the full record collection.
///
/// Pure function: no side effects and no caching. Averages are defined as 0
/// for an empty collection, so summarizing never divides by zero.
///
/// # Examples
///
/// ```
/// use appdex::domain::ApplicationRecord;
/// use appdex::query::summarize;
///
/// let mut a = ApplicationRecord::empty("A");
/// a.platforms = "Mac, iOS".to_string();
///
/// let stats = summarize(&[a]);
/// assert_eq!(stats.total_apps, 1);
/// assert_eq!(stats.cross_platform_apps, 1);
/// ```
#[must_use]
pub fn summarize(records: &[ApplicationRecord]) -> CatalogStats {
    let total_apps = records.len();

    let mac_apps = records
        .iter()
        .filter(|r| r.supports_platform("mac"))
        .count();
    let ios_apps = records
        .iter()
        .filter(|r| r.supports_platform("ios"))
        .count();
    let cross_platform_apps = records
        .iter()
        .filter(|r| r.supports_platform("mac") && r.supports_platform("ios"))
        .count();

    let (average_price, average_rating) = if total_apps == 0 {
        (0.0, 0.0)
    } else {
        #[allow(clippy::cast_precision_loss)]
        let count = total_apps as f64;
        let total_price: f64 = records.iter().map(|r| r.price).sum();
        let total_rating: f64 = records.iter().map(|r| r.rating).sum();
        (total_price / count, total_rating / count)
    };

    CatalogStats {
        total_apps,
        mac_apps,
        ios_apps,
        cross_platform_apps,
        average_price,
        average_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64, rating: f64, platforms: &str) -> ApplicationRecord {
        let mut r = ApplicationRecord::empty(name);
        r.price = price;
        r.rating = rating;
        r.platforms = platforms.to_string();
        r
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        let stats = summarize(&[]);
        assert_eq!(stats.total_apps, 0);
        assert_eq!(stats.average_price, 0.0);
        assert_eq!(stats.average_rating, 0.0);
    }

    #[test]
    fn platform_counts_include_overlapping_records() {
        let records = vec![
            record("A", 0.0, 0.0, "Mac"),
            record("B", 0.0, 0.0, "iOS"),
            record("C", 0.0, 0.0, "Mac, iOS"),
        ];
        let stats = summarize(&records);
        assert_eq!(stats.total_apps, 3);
        assert_eq!(stats.mac_apps, 2);
        assert_eq!(stats.ios_apps, 2);
        assert_eq!(stats.cross_platform_apps, 1);
    }

    #[test]
    fn web_only_records_never_feed_cross_platform() {
        let records = vec![record("W", 0.0, 0.0, "Web")];
        let stats = summarize(&records);
        assert_eq!(stats.mac_apps, 0);
        assert_eq!(stats.ios_apps, 0);
        assert_eq!(stats.cross_platform_apps, 0);
    }

    #[test]
    fn averages_are_arithmetic_means() {
        let records = vec![
            record("A", 10.0, 80.0, "Mac"),
            record("B", 20.0, 100.0, "Mac"),
        ];
        let stats = summarize(&records);
        assert_eq!(stats.average_price, 15.0);
        assert_eq!(stats.average_rating, 90.0);
    }

    #[test]
    fn total_matches_collection_length() {
        let records = vec![record("A", 0.0, 0.0, ""), record("B", 0.0, 0.0, "")];
        assert_eq!(summarize(&records).total_apps, records.len());
    }
}
