//! Currency conversion and locale-aware price formatting.
//!
//! The conversion service keeps a USD-denominated exchange-rate table behind a
//! time-based cache. Lookups are always synchronous and never block on the
//! network: a stale cache triggers a fire-and-forget background refresh while
//! the current call returns the old value.
//!
//! # Modules
//!
//! - [`rates`]: Exchange-rate cache, refresh policy, and the rate source seam
//! - [`format`]: Locale-aware price formatting with the zero → "free" rule

pub mod format;
pub mod rates;

pub use format::format_price;
pub use rates::{
    CurrencyService, ExchangeRateCache, HttpRateSource, RateSource, StaticRateSource,
    DEFAULT_TTL_SECS,
};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported display currencies.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Currency {
    /// US Dollar, the rate-table base.
    #[default]
    #[serde(rename = "USD")]
    Usd,

    /// Chinese Yuan.
    #[serde(rename = "CNY")]
    Cny,

    /// Euro.
    #[serde(rename = "EUR")]
    Eur,

    /// Japanese Yen.
    #[serde(rename = "JPY")]
    Jpy,

    /// British Pound.
    #[serde(rename = "GBP")]
    Gbp,
}

/// All supported currencies, in display order.
pub const SUPPORTED_CURRENCIES: [Currency; 5] = [
    Currency::Usd,
    Currency::Cny,
    Currency::Eur,
    Currency::Jpy,
    Currency::Gbp,
];

impl Currency {
    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Cny => "CNY",
            Self::Eur => "EUR",
            Self::Jpy => "JPY",
            Self::Gbp => "GBP",
        }
    }

    /// Returns the display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Cny => "¥",
            Self::Eur => "€",
            Self::Jpy => "¥",
            Self::Gbp => "£",
        }
    }

    /// Returns the number of fraction digits used when formatting.
    ///
    /// Yen amounts are whole numbers; everything else uses two decimals.
    #[must_use]
    pub const fn fraction_digits(self) -> usize {
        match self {
            Self::Jpy => 0,
            _ => 2,
        }
    }

    /// Returns the hardcoded fallback rate relative to USD.
    ///
    /// Used to seed the cache before any successful refresh and retained as
    /// the last resort when every refresh has failed.
    #[must_use]
    pub const fn fallback_rate(self) -> f64 {
        match self {
            Self::Usd => 1.0,
            Self::Cny => 7.2,
            Self::Eur => 0.85,
            Self::Jpy => 110.0,
            Self::Gbp => 0.75,
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "CNY" => Ok(Self::Cny),
            "EUR" => Ok(Self::Eur),
            "JPY" => Ok(Self::Jpy),
            "GBP" => Ok(Self::Gbp),
            other => Err(format!("unsupported currency: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::Usd));
        assert_eq!("GBP".parse::<Currency>(), Ok(Currency::Gbp));
        assert!("XYZ".parse::<Currency>().is_err());
    }

    #[test]
    fn yen_formats_without_decimals() {
        assert_eq!(Currency::Jpy.fraction_digits(), 0);
        assert_eq!(Currency::Usd.fraction_digits(), 2);
    }

    #[test]
    fn usd_is_the_table_base() {
        assert_eq!(Currency::Usd.fallback_rate(), 1.0);
    }
}
