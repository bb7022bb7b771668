//! Exchange-rate cache and the stale-tolerant refresh policy.
//!
//! The cache holds a USD-denominated rate table with a TTL. Reads are always
//! served from the cache synchronously; when a lookup finds the cache older
//! than its TTL it fires a background refresh and still returns the current
//! (possibly stale) value. A failed refresh keeps the previous table (the
//! hardcoded fallback rates if no refresh ever succeeded) and is logged,
//! never surfaced to the caller.
//!
//! The interface is deliberately split in two: the synchronous read path
//! ([`CurrencyService::rate`]) and the refresh path
//! ([`CurrencyService::refresh_if_stale`] / [`CurrencyService::refresh_now`]),
//! so that the "never block on refresh" contract is explicit. Reads and the
//! background table swap are coordinated with an `RwLock`, so a reader never
//! observes a half-updated table.

use crate::currency::{Currency, SUPPORTED_CURRENCIES};
use crate::domain::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Default cache time-to-live in seconds (1 hour).
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// TTL-bound exchange-rate table, USD base.
///
/// Seeded with the hardcoded fallback rates and a fresh timestamp; persisted
/// across sessions alongside the user's locale/currency preference and updated
/// by successful background fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateCache {
    /// Rate per currency relative to a USD base.
    pub rates: BTreeMap<Currency, f64>,

    /// Unix timestamp of the last successful refresh (or seeding).
    pub last_updated: i64,

    /// Time-to-live in seconds.
    pub ttl_secs: i64,
}

impl Default for ExchangeRateCache {
    fn default() -> Self {
        let rates = SUPPORTED_CURRENCIES
            .iter()
            .map(|c| (*c, c.fallback_rate()))
            .collect();

        Self {
            rates,
            last_updated: chrono::Utc::now().timestamp(),
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

impl ExchangeRateCache {
    /// Returns true if the cache age exceeds its TTL at the given time.
    #[must_use]
    pub fn is_stale(&self, now: i64) -> bool {
        now - self.last_updated > self.ttl_secs
    }

    /// Returns the USD-base rate for a currency, defaulting to 1 when absent.
    #[must_use]
    pub fn rate_for(&self, currency: Currency) -> f64 {
        self.rates.get(&currency).copied().unwrap_or(1.0)
    }
}

/// Source of fresh USD-base exchange rates.
///
/// The seam between the conversion service and the network. Implementations
/// are called from a background thread; failures are recovered by the service,
/// so a source may simply propagate whatever goes wrong.
pub trait RateSource: Send + Sync + 'static {
    /// Fetches a fresh USD-base rate table.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::RateFetch`] when the table cannot be obtained.
    fn fetch(&self) -> Result<BTreeMap<Currency, f64>>;
}

/// HTTP rate source against a USD-base JSON endpoint.
///
/// Expects a response shaped like `{"rates": {"CNY": 7.2, ...}}` and extracts
/// only the supported currencies; anything else in the payload is ignored.
pub struct HttpRateSource {
    url: String,
}

impl HttpRateSource {
    /// Creates a source fetching from the given endpoint URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl RateSource for HttpRateSource {
    fn fetch(&self) -> Result<BTreeMap<Currency, f64>> {
        let response = reqwest::blocking::get(&self.url)
            .map_err(|e| CatalogError::RateFetch(format!("request failed: {e}")))?;

        let payload: serde_json::Value = response
            .json()
            .map_err(|e| CatalogError::RateFetch(format!("invalid response body: {e}")))?;

        let rates_object = payload
            .get("rates")
            .and_then(serde_json::Value::as_object)
            .ok_or_else(|| CatalogError::RateFetch("response has no rates object".to_string()))?;

        let mut rates = BTreeMap::new();
        for currency in SUPPORTED_CURRENCIES {
            if let Some(rate) = rates_object.get(currency.code()).and_then(serde_json::Value::as_f64) {
                rates.insert(currency, rate);
            }
        }

        if rates.is_empty() {
            return Err(CatalogError::RateFetch(
                "response carried no supported currencies".to_string(),
            ));
        }

        Ok(rates)
    }
}

/// Rate source returning a fixed table.
///
/// Useful for tests and offline operation.
pub struct StaticRateSource {
    rates: BTreeMap<Currency, f64>,
}

impl StaticRateSource {
    /// Creates a source that always returns the given table.
    #[must_use]
    pub fn new(rates: BTreeMap<Currency, f64>) -> Self {
        Self { rates }
    }
}

impl RateSource for StaticRateSource {
    fn fetch(&self) -> Result<BTreeMap<Currency, f64>> {
        Ok(self.rates.clone())
    }
}

/// Currency conversion service with a stale-tolerant rate cache.
///
/// Cheap to clone; clones share the same cache and refresh state, matching
/// the process-lifetime nature of the rate table.
#[derive(Clone)]
pub struct CurrencyService {
    cache: Arc<RwLock<ExchangeRateCache>>,
    source: Arc<dyn RateSource>,
    refresh_in_flight: Arc<AtomicBool>,
}

impl CurrencyService {
    /// Creates a service over an initial cache and a rate source.
    ///
    /// The initial cache typically comes from the preference store (restoring
    /// the previous session's table) or [`ExchangeRateCache::default`].
    #[must_use]
    pub fn new(cache: ExchangeRateCache, source: impl RateSource) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            source: Arc::new(source),
            refresh_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns the conversion rate from one currency to another.
    ///
    /// Same-currency is always exactly 1. Otherwise the rate is computed via
    /// the USD-denominated table as `table[to] / table[from]`, read from the
    /// current cache. A stale cache fires a background refresh; this call
    /// still returns the currently cached value without waiting.
    #[must_use]
    pub fn rate(&self, from: Currency, to: Currency) -> f64 {
        if from == to {
            return 1.0;
        }

        self.refresh_if_stale();

        let cache = self.read_cache();
        cache.rate_for(to) / cache.rate_for(from)
    }

    /// Converts an amount between currencies using the cached rate.
    #[must_use]
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> f64 {
        amount * self.rate(from, to)
    }

    /// Fires a background refresh if the cache age exceeds its TTL.
    ///
    /// Fire-and-forget: the refresh runs on its own thread, at most one at a
    /// time. There is no retry policy beyond trying again on the next stale
    /// lookup, and no cancellation.
    pub fn refresh_if_stale(&self) {
        let now = chrono::Utc::now().timestamp();
        if !self.read_cache().is_stale(now) {
            return;
        }

        if self
            .refresh_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        tracing::debug!("exchange-rate cache is stale, refreshing in background");

        let service = self.clone();
        std::thread::spawn(move || {
            service.run_refresh();
            service.refresh_in_flight.store(false, Ordering::Release);
        });
    }

    /// Refreshes the rate table synchronously.
    ///
    /// Returns true if the table was replaced. A failed fetch keeps the
    /// previous table and returns false; it is logged, never an error.
    pub fn refresh_now(&self) -> bool {
        self.run_refresh()
    }

    /// Returns a snapshot of the current cache, e.g. for persistence.
    #[must_use]
    pub fn cache_snapshot(&self) -> ExchangeRateCache {
        self.read_cache().clone()
    }

    fn run_refresh(&self) -> bool {
        match self.source.fetch() {
            Ok(rates) => {
                let count = rates.len();
                {
                    let mut cache = match self.cache.write() {
                        Ok(cache) => cache,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                    cache.rates = rates;
                    cache.last_updated = chrono::Utc::now().timestamp();
                }
                tracing::debug!(currency_count = count, "exchange rates refreshed");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "exchange-rate refresh failed, keeping previous table");
                false
            }
        }
    }

    fn read_cache(&self) -> std::sync::RwLockReadGuard<'_, ExchangeRateCache> {
        match self.cache.read() {
            Ok(cache) => cache,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
