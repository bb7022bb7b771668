//! Storage layer for persisted user preferences.
//!
//! The only persistence in the engine is the local preference cache: the
//! selected locale and currency plus the exchange-rate table, stored under a
//! fixed file name in the platform data directory. The catalog itself is never
//! persisted; it is reloaded from the CSV source on every startup.
//!
//! # Modules
//!
//! - `prefs`: JSON file preference store with atomic writes

pub mod prefs;

pub use prefs::{PreferenceStore, PREFERENCES_FILE};
