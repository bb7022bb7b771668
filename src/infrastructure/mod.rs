//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities with no domain knowledge of their own,
//! currently limited to resolving the per-user data directory used by the
//! preference store.

pub mod paths;

pub use paths::{data_dir, preferences_path};
