//! Appdex: a client-side application-catalog engine.
//!
//! Appdex loads a bundled CSV of application listings once, then lets callers
//! slice and view it: free-text search, platform/price/rating filtering,
//! deterministic sorting, localized labels, and currency conversion with a
//! stale-tolerant exchange-rate cache.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI shim (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← CatalogSession
//! │  - Record collection ownership                      │  ← Filter state
//! │  - Derived view + statistics                        │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Loader        │   │ Query Engine  │   │ Currency/i18n │
//! │ (loader/)     │   │ (query/)      │   │ (currency/,   │
//! │ - CSV parsing │   │ - Filtering   │   │  i18n/)       │
//! │ - Coercion    │   │ - Sorting     │   │ - Rate cache  │
//! │ - Enrichment  │   │ - Statistics  │   │ - Formatting  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Storage & Infrastructure Layers            │
//! │  - Record model, errors (domain/)                   │
//! │  - Preference persistence (storage/)                │
//! │  - Data-dir resolution (infrastructure/)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data flow
//!
//! 1. **Load**: the loader parses the CSV source into `ApplicationRecord`s,
//!    coercing numeric fields, dropping nameless rows, and enriching records
//!    with derived metadata.
//! 2. **Summarize**: the statistics engine computes aggregate metrics once per
//!    load.
//! 3. **Query**: each filter-state change re-derives the filtered, sorted view
//!    from the full collection.
//! 4. **Convert**: prices are converted and formatted on demand; the
//!    exchange-rate cache refreshes itself in the background when stale and
//!    never blocks a lookup.
//!
//! # Example
//!
//! ```no_run
//! use appdex::query::FilterUpdate;
//! use appdex::{loader, CatalogSession};
//!
//! let records = loader::load_path("apps.csv")?;
//! let mut session = CatalogSession::new(records);
//!
//! session.update_filter(FilterUpdate {
//!     search_term: Some("clean".to_string()),
//!     ..FilterUpdate::default()
//! });
//!
//! for record in session.filtered() {
//!     println!("{}", record.name);
//! }
//! # Ok::<(), appdex::CatalogError>(())
//! ```

pub mod app;
pub mod currency;
pub mod domain;
pub mod i18n;
pub mod icons;
pub mod infrastructure;
pub mod loader;
pub mod observability;
pub mod query;
pub mod storage;

pub use app::CatalogSession;
pub use currency::{format_price, Currency, CurrencyService};
pub use domain::{ApplicationRecord, CatalogError, Result};
pub use i18n::Locale;
pub use query::{CatalogStats, FilterState, FilterUpdate};

use currency::HttpRateSource;
use serde::Deserialize;
use storage::PreferenceStore;

/// Default USD-base exchange-rate endpoint.
const DEFAULT_RATE_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Engine configuration, typically loaded from a TOML file.
///
/// Every field has a default, so a missing or partial configuration file
/// still yields a working engine.
///
/// # Example
///
/// ```toml
/// # appdex.toml
/// catalog_path = "data/apps.csv"
/// icon_dir = "icon"
/// rate_endpoint = "https://api.exchangerate-api.com/v4/latest/USD"
/// rate_ttl_secs = 3600
/// default_locale = "zh-CN"
/// default_currency = "CNY"
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the CSV catalog source.
    pub catalog_path: String,

    /// Directory holding `<name>.png` record icons and the fallback image.
    pub icon_dir: String,

    /// USD-base endpoint used by the background exchange-rate refresh.
    pub rate_endpoint: String,

    /// Exchange-rate cache time-to-live in seconds.
    pub rate_ttl_secs: i64,

    /// Locale used on first run, before a preference file exists.
    pub default_locale: Locale,

    /// Display currency used on first run; `None` derives it from the locale
    /// (zh-CN maps to CNY, ja-JP to JPY, en-US to USD).
    pub default_currency: Option<Currency>,

    /// Log level used when `RUST_LOG` is not set.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: "apps.csv".to_string(),
            icon_dir: "icon".to_string(),
            rate_endpoint: DEFAULT_RATE_ENDPOINT.to_string(),
            rate_ttl_secs: currency::DEFAULT_TTL_SECS,
            default_locale: Locale::default(),
            default_currency: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Config(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| CatalogError::Config(format!("invalid config {}: {e}", path.display())))
    }
}

/// Fully initialized engine: session, conversion service, and preferences.
///
/// Produced by [`initialize`]. The engine keeps the user's locale and currency
/// selection in sync with the preference store and offers a convenience
/// formatter that combines conversion and localization.
pub struct Engine {
    /// Catalog state container.
    pub session: CatalogSession,

    /// Currency conversion service sharing the persisted rate cache.
    pub currency: CurrencyService,

    prefs: PreferenceStore,
    locale: Locale,
    display_currency: Currency,
}

impl Engine {
    /// Returns the active locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the active display currency.
    #[must_use]
    pub fn display_currency(&self) -> Currency {
        self.display_currency
    }

    /// Switches the locale and persists the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference save fails.
    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        self.locale = locale;
        self.prefs.set_locale(locale)
    }

    /// Switches the display currency and persists the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference save fails.
    pub fn set_display_currency(&mut self, currency: Currency) -> Result<()> {
        self.display_currency = currency;
        self.prefs.set_currency(currency)
    }

    /// Formats a USD catalog price in the active currency and locale.
    ///
    /// Converts through the cached rate table; a zero price yields the
    /// localized free label regardless of currency.
    #[must_use]
    pub fn display_price(&self, usd_amount: f64) -> String {
        let converted = self
            .currency
            .convert(usd_amount, Currency::Usd, self.display_currency);
        format_price(converted, self.display_currency, self.locale)
    }

    /// Persists the current exchange-rate cache snapshot.
    ///
    /// Called before shutdown so a refreshed table survives a restart.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference save fails.
    pub fn persist_rates(&mut self) -> Result<()> {
        self.prefs.set_exchange_rates(self.currency.cache_snapshot())
    }
}

/// Initializes the engine from configuration.
///
/// Loads the catalog from `config.catalog_path` (a hard error when the source
/// is unreadable), restores locale/currency/rate-cache preferences from the
/// user data directory, and wires the conversion service to the configured
/// rate endpoint.
///
/// # Errors
///
/// Returns [`CatalogError::Load`] when the catalog source cannot be loaded
/// and [`CatalogError::Io`] when the data directory cannot be created.
pub fn initialize(config: &Config) -> Result<Engine> {
    tracing::debug!(catalog = %config.catalog_path, "initializing appdex engine");

    let records = loader::load_path(&config.catalog_path)?;
    let session = CatalogSession::new(records);

    let prefs = PreferenceStore::open(infrastructure::preferences_path())?;

    // Saved preferences win; config defaults only apply on first run.
    let (locale, display_currency) = if prefs.loaded_from_disk() {
        (prefs.locale(), prefs.currency())
    } else {
        let locale = config.default_locale;
        let currency = config
            .default_currency
            .unwrap_or_else(|| locale.default_currency());
        (locale, currency)
    };

    let mut cache = prefs.exchange_rates();
    cache.ttl_secs = config.rate_ttl_secs;

    let currency = CurrencyService::new(cache, HttpRateSource::new(config.rate_endpoint.clone()));

    Ok(Engine {
        session,
        currency,
        prefs,
        locale,
        display_currency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_complete() {
        let config = Config::default();
        assert_eq!(config.catalog_path, "apps.csv");
        assert_eq!(config.rate_endpoint, DEFAULT_RATE_ENDPOINT);
        assert_eq!(config.rate_ttl_secs, currency::DEFAULT_TTL_SECS);
        assert_eq!(config.default_locale, Locale::ZhCn);
        assert!(config.default_currency.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("catalog_path = \"other.csv\"").unwrap();
        assert_eq!(config.catalog_path, "other.csv");
        assert_eq!(config.icon_dir, "icon");
        assert_eq!(config.rate_endpoint, DEFAULT_RATE_ENDPOINT);
    }

    #[test]
    fn locale_and_currency_parse_from_toml() {
        let config: Config =
            toml::from_str("default_locale = \"ja-JP\"\ndefault_currency = \"JPY\"").unwrap();
        assert_eq!(config.default_locale, Locale::JaJp);
        assert_eq!(config.default_currency, Some(Currency::Jpy));
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let err = Config::from_file("/no/such/appdex.toml").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }
}
