//! Derived, non-authoritative record enrichment.
//!
//! Enrichment fills in metadata the CSV source does not carry: a category
//! inferred from description keywords, per-platform support detail with
//! minimum-OS-version defaults, and a system-requirements line derived from
//! the platform tags. Enrichment is deterministic so that loading the same
//! source twice yields identical records.

use crate::domain::PlatformSupport;
use std::collections::BTreeMap;

/// Baseline minimum macOS version assumed for Mac-tagged records.
const MAC_MIN_VERSION: &str = "macOS 10.15";

/// Baseline minimum iOS version assumed for iOS-tagged records.
const IOS_MIN_VERSION: &str = "iOS 14.0";

/// Keyword groups mapped to category labels, checked in order.
///
/// The first group with any keyword present in the lowercased description
/// wins. Descriptions matching nothing fall back to "Productivity".
const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (&["clean", "optimize", "system"], "System Tools"),
    (&["design", "image", "photo"], "Design"),
    (&["develop", "code", "programming"], "Developer Tools"),
    (&["writing", "document", "note"], "Writing"),
    (&["task", "manage", "time"], "Productivity"),
    (&["video", "audio", "media"], "Media"),
];

/// Infers a category label from keyword matches in the description.
///
/// Classification is non-authoritative: it only applies when the source row
/// carries no explicit category.
#[must_use]
pub fn categorize(description: &str) -> &'static str {
    let lower = description.to_lowercase();

    for (keywords, label) in CATEGORY_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return label;
        }
    }

    "Productivity"
}

/// Synthesizes per-platform support detail from the raw platform string.
///
/// Each recognized tag gets an entry with the catalog-wide minimum-OS default
/// and generic capability notes. Unrecognized tags (e.g. `"Web"`) get an entry
/// without a version requirement.
#[must_use]
pub fn platform_support(platforms: &str) -> BTreeMap<String, PlatformSupport> {
    let mut support = BTreeMap::new();
    let lower = platforms.to_lowercase();

    if lower.contains("mac") {
        support.insert(
            "Mac".to_string(),
            PlatformSupport {
                min_version: MAC_MIN_VERSION.to_string(),
                features: vec![
                    "Full feature set".to_string(),
                    "Native performance".to_string(),
                ],
            },
        );
    }

    if lower.contains("ios") {
        support.insert(
            "iOS".to_string(),
            PlatformSupport {
                min_version: IOS_MIN_VERSION.to_string(),
                features: vec![
                    "Mobile optimized".to_string(),
                    "Touch interface".to_string(),
                ],
            },
        );
    }

    if lower.contains("web") {
        support.insert(
            "Web".to_string(),
            PlatformSupport {
                min_version: "Any modern browser".to_string(),
                features: vec!["No installation required".to_string()],
            },
        );
    }

    support
}

/// Derives a system-requirements line from the platform tags.
///
/// Mac-tagged records get the macOS baseline, iOS-only records the iOS
/// baseline. Returns `None` when no versioned platform tag is present.
#[must_use]
pub fn system_requirements(platforms: &str) -> Option<String> {
    let lower = platforms.to_lowercase();

    if lower.contains("mac") {
        Some(format!("{MAC_MIN_VERSION} or later"))
    } else if lower.contains("ios") {
        Some(format!("{IOS_MIN_VERSION} or later"))
    } else {
        None
    }
}
