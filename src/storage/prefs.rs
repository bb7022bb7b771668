//! JSON file-based preference store.
//!
//! Persists the user's locale and currency selection together with the
//! exchange-rate cache, keyed by a fixed storage file name and restored on the
//! next startup. Writes are atomic (write-to-temp + rename) to prevent
//! corruption on crashes.
//!
//! Unlike catalog loading, preference restore is never fatal: a missing or
//! corrupt file falls back to defaults so the catalog still works with the
//! hardcoded rate table.

use crate::currency::{Currency, ExchangeRateCache};
use crate::domain::error::{CatalogError, Result};
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed storage file name within the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Preference envelope serialized to disk.
///
/// Wraps all persisted values in a single versioned object for future
/// migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Version of the storage format.
    version: u32,

    /// Selected UI locale.
    #[serde(default)]
    locale: Locale,

    /// Selected display currency.
    #[serde(default)]
    currency: Currency,

    /// Persisted exchange-rate cache, including its timestamp and TTL.
    #[serde(default)]
    exchange_rates: ExchangeRateCache,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: 1,
            locale: Locale::default(),
            currency: Currency::default(),
            exchange_rates: ExchangeRateCache::default(),
        }
    }
}

/// JSON file preference store with atomic writes.
///
/// The whole envelope is kept in memory and persisted on modification. The
/// store is `Send` but not `Sync`; it is designed to be owned by the single
/// UI-facing session.
pub struct PreferenceStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory envelope, loaded on creation.
    data: PreferenceData,

    /// Tracks if data has been modified since last save.
    dirty: bool,

    /// True when the envelope was restored from an existing, readable file.
    loaded_from_disk: bool,
}

impl PreferenceStore {
    /// Creates or opens the preference store at the given file path.
    ///
    /// Missing or unreadable preference files fall back to defaults; only a
    /// failure to create the parent directory is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let (data, loaded_from_disk) = if file_path.exists() {
            match Self::load_from_file(&file_path) {
                Ok(data) => (data, true),
                Err(e) => {
                    tracing::warn!(error = %e, "unreadable preference file, using defaults");
                    (PreferenceData::default(), false)
                }
            }
        } else {
            tracing::debug!("no preference file yet, using defaults");
            (PreferenceData::default(), false)
        };

        Ok(Self {
            file_path,
            data,
            dirty: false,
            loaded_from_disk,
        })
    }

    fn load_from_file(path: &PathBuf) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| CatalogError::Storage(format!("failed to parse preferences: {e}")))
    }

    /// Saves the envelope to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path,
    /// so the file is never left half-written.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the filesystem operations fail.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| CatalogError::Storage(format!("failed to serialize preferences: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }

    /// Returns true if the store restored an existing preference file.
    ///
    /// A fresh or corrupt file yields `false`, letting callers apply their
    /// own first-run defaults instead of the envelope's.
    #[must_use]
    pub fn loaded_from_disk(&self) -> bool {
        self.loaded_from_disk
    }

    /// Returns the persisted locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.data.locale
    }

    /// Returns the persisted display currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.data.currency
    }

    /// Returns the persisted exchange-rate cache.
    #[must_use]
    pub fn exchange_rates(&self) -> ExchangeRateCache {
        self.data.exchange_rates.clone()
    }

    /// Updates the persisted locale.
    ///
    /// # Errors
    ///
    /// Returns an error if the save fails.
    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        self.data.locale = locale;
        self.dirty = true;
        self.save_to_file()
    }

    /// Updates the persisted display currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the save fails.
    pub fn set_currency(&mut self, currency: Currency) -> Result<()> {
        self.data.currency = currency;
        self.dirty = true;
        self.save_to_file()
    }

    /// Updates the persisted exchange-rate cache.
    ///
    /// Called with the conversion service's current snapshot so a refreshed
    /// table survives a restart.
    ///
    /// # Errors
    ///
    /// Returns an error if the save fails.
    pub fn set_exchange_rates(&mut self, cache: ExchangeRateCache) -> Result<()> {
        self.data.exchange_rates = cache;
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for PreferenceStore {
    /// Saves pending changes on drop so callers cannot lose preferences.
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save preferences on drop");
            }
        }
    }
}
