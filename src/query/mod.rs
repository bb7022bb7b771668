//! Query layer: the filter/sort engine and derived statistics.
//!
//! Both halves of this layer are pure transformations over the immutable
//! record collection. The filter/sort engine derives a view for the current
//! [`FilterState`]; the statistics engine summarizes the full collection.
//! Neither mutates the collection or holds state of its own.
//!
//! # Modules
//!
//! - [`filter`]: Filter state, predicates, and the stable sort comparator
//! - [`stats`]: Aggregate metrics over a record collection

pub mod filter;
pub mod stats;

pub use filter::{
    apply, compare_by_key, filter_records, sort_records, FilterState, FilterUpdate,
    PlatformFilter, SortDirection, SortKey,
};
pub use stats::{summarize, CatalogStats};
