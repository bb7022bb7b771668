//! Error types for the appdex catalog engine.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! # Propagation policy
//!
//! Only a whole-source load failure is a hard, caller-visible error. Every other
//! failure mode in the pipeline is recovered locally with a defined fallback:
//! unparsable numeric fields coerce to 0, nameless rows are dropped, stale
//! exchange rates keep serving the cached value, and failed rate refreshes retain
//! the last-known-good table. Those soft conditions are logged, never raised.

use thiserror::Error;

/// The main error type for catalog engine operations.
///
/// This enum consolidates all hard error conditions that can occur, from CSV
/// loading to preference persistence and configuration parsing. Most variants
/// wrap underlying errors from external crates using `#[from]` for automatic
/// conversion.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source could not be fetched or was structurally unreadable.
    ///
    /// This is the only error surfaced for a load attempt: either the whole
    /// load succeeds (producing the set of valid records) or it fails cleanly
    /// with this variant. Partial results are never returned.
    #[error("Load error: {0}")]
    Load(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preference storage operation failed.
    ///
    /// Occurs when reading from or writing to the preference store fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Exchange-rate fetch failed.
    ///
    /// Produced by [`RateSource`](crate::currency::RateSource) implementations.
    /// The rate service never propagates this to its callers; it is logged and
    /// the previous rate table is retained.
    #[error("Rate fetch error: {0}")]
    RateFetch(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file cannot be read or parsed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for catalog engine operations.
///
/// This is a type alias for `std::result::Result<T, CatalogError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, CatalogError>;
