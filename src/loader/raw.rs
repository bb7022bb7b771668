//! Raw CSV row type and the coercion step into validated records.
//!
//! This module defines [`RawRow`], the strict intermediate representation of one
//! CSV row before validation. Keeping the raw shape separate from
//! [`ApplicationRecord`] makes the soft-failure behavior (silent numeric
//! coercion, silent nameless-row rejection) an explicit, testable
//! transformation instead of implicit behavior buried in a mapping closure.
//!
//! # Coercion rules
//!
//! - Numeric fields (price, rating): attempt a parse; on failure substitute 0.
//!   The result is never `NaN` and parsing never aborts the load.
//! - String fields: trimmed; absent or empty optional fields become `None`.
//! - Rating is clamped to `[0, 100]`; price is clamped to be non-negative.
//! - A row without a name is rejected (the loader drops it silently).

use crate::domain::ApplicationRecord;
use crate::loader::enrich;
use serde::Deserialize;

/// One unvalidated CSV row, exactly as parsed.
///
/// Every field is optional: the CSV source may omit columns entirely, carry
/// empty cells, or hold unparsable numerics. Extra columns in the source are
/// ignored by the deserializer. The [`into_record`](Self::into_record) step
/// decides what survives.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    /// Display name; rows without one are rejected.
    #[serde(default)]
    pub name: Option<String>,

    /// Free-text functional description.
    #[serde(default)]
    pub description: Option<String>,

    /// Store page URL.
    #[serde(default)]
    pub store_link: Option<String>,

    /// Vendor site URL.
    #[serde(default)]
    pub vendor_site: Option<String>,

    /// Subscription price; may arrive as an unparsable string.
    #[serde(default, alias = "price")]
    pub subscription_price: Option<String>,

    /// Rating on a 0-100 scale; may arrive as an unparsable string.
    #[serde(default)]
    pub rating: Option<String>,

    /// Comma-separated platform tags, e.g. `"Mac, iOS"`.
    #[serde(default, alias = "platforms")]
    pub platform: Option<String>,

    /// Vendor name.
    #[serde(default)]
    pub developer: Option<String>,

    /// Explicit category label; inferred from the description when absent.
    #[serde(default)]
    pub category: Option<String>,

    /// Last-updated date string.
    #[serde(default)]
    pub last_updated: Option<String>,

    /// Download size string.
    #[serde(default)]
    pub size: Option<String>,

    /// Explicit system requirements; derived from platform tags when absent.
    #[serde(default)]
    pub system_requirements: Option<String>,
}

impl RawRow {
    /// Validates and coerces this row into an [`ApplicationRecord`].
    ///
    /// Returns `None` when the row has no usable name; such rows are excluded
    /// from the load output without being counted or reported.
    ///
    /// All other defects are repaired in place: unparsable numerics coerce to
    /// 0 (logged at debug), the rating is clamped to `[0, 100]`, and missing
    /// enrichment fields are synthesized from the description and platform
    /// tags.
    #[must_use]
    pub fn into_record(self) -> Option<ApplicationRecord> {
        let name = clean(self.name)?;

        let description = clean(self.description).unwrap_or_default();
        let platforms = clean(self.platform).unwrap_or_default();

        let price = coerce_number(self.subscription_price.as_deref(), &name, "price").max(0.0);
        let rating = coerce_number(self.rating.as_deref(), &name, "rating").clamp(0.0, 100.0);

        let category = clean(self.category)
            .or_else(|| Some(enrich::categorize(&description).to_string()));
        let system_requirements = clean(self.system_requirements)
            .or_else(|| enrich::system_requirements(&platforms));
        let platform_support = enrich::platform_support(&platforms);

        Some(ApplicationRecord {
            name,
            description,
            store_link: clean(self.store_link),
            vendor_site: clean(self.vendor_site),
            price,
            rating,
            platforms,
            developer: clean(self.developer),
            category,
            last_updated: clean(self.last_updated),
            size: clean(self.size),
            system_requirements,
            platform_support,
        })
    }
}

/// Trims an optional string, mapping absent or empty values to `None`.
fn clean(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Parses a numeric field, substituting 0 on any failure.
///
/// The substitution is a soft condition: it is logged at debug level and never
/// escalated. The returned value is always finite.
fn coerce_number(value: Option<&str>, record_name: &str, field: &str) -> f64 {
    let Some(raw) = value else {
        return 0.0;
    };

    match raw.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => {
            if !raw.trim().is_empty() {
                tracing::debug!(
                    record = %record_name,
                    field = field,
                    raw = %raw,
                    "unparsable numeric field coerced to 0"
                );
            }
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with_name(name: &str) -> RawRow {
        RawRow {
            name: Some(name.to_string()),
            ..RawRow::default()
        }
    }

    #[test]
    fn nameless_row_is_rejected() {
        assert!(RawRow::default().into_record().is_none());

        let mut row = RawRow::default();
        row.name = Some("   ".to_string());
        assert!(row.into_record().is_none());
    }

    #[test]
    fn unparsable_price_coerces_to_zero() {
        let mut row = row_with_name("B");
        row.subscription_price = Some("bad".to_string());
        let record = row.into_record().unwrap();
        assert_eq!(record.price, 0.0);
        assert!(record.price.is_finite());
    }

    #[test]
    fn rating_is_clamped_to_scale() {
        let mut row = row_with_name("A");
        row.rating = Some("150".to_string());
        assert_eq!(row.into_record().unwrap().rating, 100.0);

        let mut row = row_with_name("A");
        row.rating = Some("-5".to_string());
        assert_eq!(row.into_record().unwrap().rating, 0.0);
    }

    #[test]
    fn negative_price_is_clamped_to_zero() {
        let mut row = row_with_name("A");
        row.subscription_price = Some("-9.99".to_string());
        assert_eq!(row.into_record().unwrap().price, 0.0);
    }

    #[test]
    fn optional_strings_trim_to_none() {
        let mut row = row_with_name("A");
        row.store_link = Some("  ".to_string());
        row.vendor_site = Some(" https://example.com ".to_string());
        let record = row.into_record().unwrap();
        assert!(record.store_link.is_none());
        assert_eq!(record.vendor_site.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn category_falls_back_to_inference() {
        let mut row = row_with_name("Cleaner");
        row.description = Some("Clean and optimize your disk".to_string());
        let record = row.into_record().unwrap();
        assert_eq!(record.category.as_deref(), Some("System Tools"));

        let mut row = row_with_name("Cleaner");
        row.category = Some("Utilities".to_string());
        let record = row.into_record().unwrap();
        assert_eq!(record.category.as_deref(), Some("Utilities"));
    }
}
