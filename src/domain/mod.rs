//! Domain layer for the appdex catalog engine.
//!
//! This module contains the core domain types for the catalog, independent of
//! loading, querying, or infrastructure concerns. It keeps business rules
//! isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Application record domain model and platform helpers
//!
//! # Examples
//!
//! ```
//! use appdex::domain::ApplicationRecord;
//!
//! let mut record = ApplicationRecord::empty("CleanMyMac");
//! record.platforms = "Mac".to_string();
//! assert!(record.supports_platform("mac"));
//! ```

pub mod error;
pub mod record;

pub use error::{CatalogError, Result};
pub use record::{ApplicationRecord, PlatformSupport};
